#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod error;
pub mod image;
pub mod render;
pub mod session;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::{ColorMode, Rgb};
pub use crate::error::{DotArtError, Result};
pub use crate::render::{render_dot_art, CellSize, RenderParams, RenderReport};
pub use crate::session::{DotArtSession, EXPORT_FILE_NAME};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use dot_art::prelude::*;
///
/// # fn main() {
/// let img = RgbImageU8::filled(64, 48, Rgb::new(255, 0, 0));
/// let params = RenderParams::new(CellSize::clamped(6), ColorMode::Grayscale);
/// let canvas = render_dot_art(&img.as_view(), params);
/// println!("covered={}", canvas.covered_pixels());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{DotCanvas, ImageRgb8, RgbImageU8};
    pub use crate::{render_dot_art, CellSize, ColorMode, DotArtSession, RenderParams, Rgb};
}
