//! Owned RGBA output raster in row-major layout (stride == width).
//!
//! Starts fully transparent; the renderer writes opaque dot pixels into it.
//! Kept separate from the RGB source type because uncovered pixels must stay
//! transparent in the exported PNG.

/// RGBA quadruple.
pub type Rgba = [u8; 4];

/// Fully transparent pixel.
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotCanvas {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba>,
}

impl DotCanvas {
    /// Construct a transparent canvas of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![TRANSPARENT; w * h],
        }
    }
    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Number of pixels with non-zero alpha.
    pub fn covered_pixels(&self) -> usize {
        self.data.iter().filter(|px| px[3] != 0).count()
    }
}

impl crate::image::traits::ImageView for DotCanvas {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for DotCanvas {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
