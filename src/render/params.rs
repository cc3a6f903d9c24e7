//! Parameter types for the dot renderer.
//!
//! Range checking happens here, at the boundary where values enter the
//! system; the renderer itself trusts whatever [`CellSize`] it is handed.

use crate::color::ColorMode;
use crate::error::{DotArtError, Result};
use serde::{Deserialize, Serialize};

/// Grid cell edge length in pixels, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CellSize(u32);

impl CellSize {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 20;
    pub const DEFAULT: CellSize = CellSize(4);

    /// Validate `value`, rejecting anything outside `MIN..=MAX`.
    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DotArtError::InvalidCellSize {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamp `value` into `MIN..=MAX`.
    pub fn clamped(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Cell size as a pixel step.
    #[inline]
    pub fn step(self) -> usize {
        self.0 as usize
    }

    /// Dot radius, `size / 2`.
    #[inline]
    pub fn radius(self) -> f32 {
        self.0 as f32 / 2.0
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for CellSize {
    type Error = DotArtError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CellSize> for u32 {
    fn from(size: CellSize) -> u32 {
        size.0
    }
}

/// Immutable inputs of one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    pub cell_size: CellSize,
    pub color_mode: ColorMode,
}

impl RenderParams {
    pub fn new(cell_size: CellSize, color_mode: ColorMode) -> Self {
        Self {
            cell_size,
            color_mode,
        }
    }

    pub fn with_cell_size(self, cell_size: CellSize) -> Self {
        Self { cell_size, ..self }
    }

    pub fn with_color_mode(self, color_mode: ColorMode) -> Self {
        Self { color_mode, ..self }
    }
}
