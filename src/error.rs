//! Error types for loading, rendering parameters and export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dot-art operations
pub type Result<T> = std::result::Result<T, DotArtError>;

/// Errors that can occur while loading, configuring or exporting dot art.
#[derive(Error, Debug)]
pub enum DotArtError {
    /// The input file could not be read or the output could not be written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// PNG encoding of the output raster failed
    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// Cell size outside the accepted range
    #[error("Cell size {value} outside {min}..={max}")]
    InvalidCellSize { value: u32, min: u32, max: u32 },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DotArtError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DotArtError::Io {
            path: path.into(),
            source,
        }
    }
}
