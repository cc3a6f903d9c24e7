//! Row access shared by the source view and the output canvas.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// The `width()` pixels of row `y`.
    fn row(&self, y: usize) -> &[Self::Pixel];

    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Overwrite `row[x0..x1]` with `value`, clipped to the row width.
    fn fill_span(&mut self, y: usize, x0: usize, x1: usize, value: Self::Pixel) {
        let row = self.row_mut(y);
        let x1 = x1.min(row.len());
        if x0 < x1 {
            row[x0..x1].fill(value);
        }
    }
}
