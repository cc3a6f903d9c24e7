//! Pixel colour type and the five per-cell colour transforms.
//!
//! Transforms work in `f32` on the sampled triple and round to the nearest
//! integer only when the colour is written to the output raster. Every output
//! channel is computed from the untouched input triple.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray level with all three channels equal to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Arithmetic mean of the three channels, unrounded.
    #[inline]
    pub fn mean(self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }

    /// Fully opaque RGBA quadruple.
    #[inline]
    pub fn opaque(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    fn from_channels([r, g, b]: [f32; 3]) -> Self {
        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Colour transform applied to each cell's sampled colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Sampled colour unchanged.
    #[default]
    Color,
    /// Channel mean on all three channels.
    Grayscale,
    /// Classic sepia matrix, clamped at 255.
    Sepia,
    /// `255 - c` per channel.
    Inverted,
    /// Pure black or white, thresholded on the channel mean.
    #[serde(rename = "blackwhite")]
    BlackWhite,
}

impl ColorMode {
    /// All modes in menu order.
    pub const ALL: [ColorMode; 5] = [
        ColorMode::Color,
        ColorMode::Grayscale,
        ColorMode::Sepia,
        ColorMode::Inverted,
        ColorMode::BlackWhite,
    ];

    /// Stable identifier used in configs and reports.
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Color => "color",
            ColorMode::Grayscale => "grayscale",
            ColorMode::Sepia => "sepia",
            ColorMode::Inverted => "inverted",
            ColorMode::BlackWhite => "blackwhite",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Color => "Color",
            ColorMode::Grayscale => "Grayscale",
            ColorMode::Sepia => "Sepia",
            ColorMode::Inverted => "Inverted",
            ColorMode::BlackWhite => "Black & White",
        }
    }

    /// Transformed channels before rounding.
    pub fn channels(self, c: Rgb) -> [f32; 3] {
        let (r, g, b) = (c.r as f32, c.g as f32, c.b as f32);
        match self {
            ColorMode::Color => [r, g, b],
            ColorMode::Grayscale => {
                let gray = c.mean();
                [gray, gray, gray]
            }
            ColorMode::Sepia => sepia(c),
            ColorMode::Inverted => [255.0 - r, 255.0 - g, 255.0 - b],
            ColorMode::BlackWhite => {
                let v = if c.mean() > 127.0 { 255.0 } else { 0.0 };
                [v, v, v]
            }
        }
    }

    /// Apply the transform and round to 8-bit channels.
    #[inline]
    pub fn apply(self, c: Rgb) -> Rgb {
        match self {
            ColorMode::Color => c,
            _ => Rgb::from_channels(self.channels(c)),
        }
    }
}

/// Sepia matrix. All three rows read the same input triple.
pub fn sepia(c: Rgb) -> [f32; 3] {
    let (r, g, b) = (c.r as f32, c.g as f32, c.b as f32);
    let sr = (0.393 * r + 0.769 * g + 0.189 * b).min(255.0);
    let sg = (0.349 * r + 0.686 * g + 0.168 * b).min(255.0);
    let sb = (0.272 * r + 0.534 * g + 0.131 * b).min(255.0);
    [sr, sg, sb]
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown color mode '{s}' (expected color, grayscale, sepia, inverted or blackwhite)")
            })
    }
}
