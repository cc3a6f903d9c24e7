//! Dot renderer: resamples a raster as a grid of flat-coloured discs.
//!
//! Overview
//! - The image plane is cut into `S × S` cells anchored at `(0, 0)`; edge
//!   cells may hang over the border and are clipped.
//! - Each cell is represented by the single source pixel at its top-left
//!   corner. There is no averaging over the cell.
//! - The sampled colour passes through the selected [`ColorMode`] and is drawn
//!   as an opaque disc of radius `S/2` centred in the cell on a transparent
//!   canvas of the source's size.
//!
//! Modules
//! - [`params`] – [`CellSize`] and [`RenderParams`].
//! - [`grid`] – cell anchor iteration.
//! - [`circle`] – disc rasterization.
//! - `dots` – the render pass and its report.
//!
//! [`ColorMode`]: crate::color::ColorMode

pub mod circle;
mod dots;
pub mod grid;
pub mod params;

pub use dots::{render_dot_art, render_dot_art_with_report, RenderReport};
pub use grid::{CellAnchor, CellGrid};
pub use params::{CellSize, RenderParams};
