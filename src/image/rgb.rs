use crate::color::Rgb;
use crate::image::traits::ImageView;

/// Borrowed RGB view over a source raster.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Rgb],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.row(y)[x]
    }
}

impl<'a> ImageView for ImageRgb8<'a> {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
