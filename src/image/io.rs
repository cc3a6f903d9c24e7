//! I/O helpers for RGB source images, PNG export and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/GIF/BMP file into an owned RGB buffer.
//! - `decode_rgb_image`: same, from bytes already in memory.
//! - `encode_png` / `save_png`: losslessly encode a [`DotCanvas`].
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{DotCanvas, ImageRgb8};
use crate::color::Rgb;
use crate::error::{DotArtError, Result};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Owned RGB buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<Rgb>,
}

impl RgbImageU8 {
    /// Construct an owned buffer from row-major pixels.
    ///
    /// Returns `None` when `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            stride: width,
            data,
        })
    }

    /// Buffer filled with a single colour.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            stride: width,
            data: vec![color; width * height],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    fn from_dynamic(img: DynamicImage) -> Self {
        let rgb = img.into_rgb8();
        let width = rgb.width() as usize;
        let height = rgb.height() as usize;
        let data = rgb
            .into_raw()
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }
}

/// Load an image from disk and convert to 8-bit RGB. Alpha is dropped.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8> {
    let bytes = fs::read(path).map_err(|e| DotArtError::io(path, e))?;
    decode_rgb_image(&bytes)
}

/// Decode in-memory image bytes, guessing the format from the content.
pub fn decode_rgb_image(bytes: &[u8]) -> Result<RgbImageU8> {
    let img = image::load_from_memory(bytes).map_err(DotArtError::Decode)?;
    Ok(RgbImageU8::from_dynamic(img))
}

fn to_rgba_image(canvas: &DotCanvas) -> RgbaImage {
    RgbaImage::from_fn(canvas.w as u32, canvas.h as u32, |x, y| {
        Rgba(canvas.get(x as usize, y as usize))
    })
}

/// Encode the canvas as PNG bytes.
pub fn encode_png(canvas: &DotCanvas) -> Result<Vec<u8>> {
    let image = to_rgba_image(canvas);
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(DotArtError::Encode)?;
    Ok(out.into_inner())
}

/// Save the canvas to a PNG file, creating parent directories.
pub fn save_png(canvas: &DotCanvas, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let bytes = encode_png(canvas)?;
    fs::write(path, bytes).map_err(|e| DotArtError::io(path, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        DotArtError::Config(format!("Failed to serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json).map_err(|e| DotArtError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DotArtError::io(parent, e))?;
        }
    }
    Ok(())
}
