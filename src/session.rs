//! Host-owned state record driving the renderer.
//!
//! A [`DotArtSession`] holds the current source raster, the current
//! [`RenderParams`] and the latest output. Every state change re-renders from
//! the source; the previous output is discarded, never read.

use crate::color::ColorMode;
use crate::error::{DotArtError, Result};
use crate::image::io::{decode_rgb_image, encode_png, load_rgb_image};
use crate::image::{DotCanvas, RgbImageU8};
use crate::render::{render_dot_art_with_report, CellSize, RenderParams, RenderReport};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File name offered for exported dot art.
pub const EXPORT_FILE_NAME: &str = "dot-art.png";

#[derive(Debug, Default)]
pub struct DotArtSession {
    source: Option<RgbImageU8>,
    params: RenderParams,
    output: Option<DotCanvas>,
    last_report: Option<RenderReport>,
}

impl DotArtSession {
    pub fn new(params: RenderParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Load the file picked by the user, if any.
    ///
    /// `None` is a no-op returning `Ok(false)`. A failed decode leaves the
    /// previous image and output in place.
    pub fn select_file(&mut self, path: Option<&Path>) -> Result<bool> {
        let Some(path) = path else {
            debug!("select_file: no file selected");
            return Ok(false);
        };
        let image = load_rgb_image(path)?;
        debug!(
            "select_file: loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.replace_source(image);
        Ok(true)
    }

    /// Load an image from encoded bytes, if any. Same return and failure
    /// semantics as [`select_file`](Self::select_file).
    pub fn load_bytes(&mut self, bytes: Option<&[u8]>) -> Result<bool> {
        let Some(bytes) = bytes else {
            debug!("load_bytes: no data");
            return Ok(false);
        };
        let image = decode_rgb_image(bytes)?;
        debug!("load_bytes: decoded {}x{}", image.width(), image.height());
        self.replace_source(image);
        Ok(true)
    }

    /// Replace the source with an already decoded raster.
    pub fn replace_source(&mut self, image: RgbImageU8) {
        self.source = Some(image);
        self.rerender();
    }

    /// Set the cell size, clamping to the accepted range.
    pub fn set_cell_size(&mut self, value: u32) {
        let size = CellSize::clamped(value);
        if size.get() != value {
            warn!("cell size {value} clamped to {}", size.get());
        }
        self.params = self.params.with_cell_size(size);
        self.rerender();
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.params = self.params.with_color_mode(mode);
        self.rerender();
    }

    pub fn params(&self) -> RenderParams {
        self.params
    }

    /// The decoded source image, shown next to the output.
    pub fn source(&self) -> Option<&RgbImageU8> {
        self.source.as_ref()
    }

    pub fn output(&self) -> Option<&DotCanvas> {
        self.output.as_ref()
    }

    pub fn last_report(&self) -> Option<&RenderReport> {
        self.last_report.as_ref()
    }

    /// Whether there is anything to export.
    pub fn can_export(&self) -> bool {
        self.output.is_some()
    }

    /// PNG bytes of the current output, or `None` when nothing is loaded.
    pub fn export_png(&self) -> Result<Option<Vec<u8>>> {
        self.output.as_ref().map(encode_png).transpose()
    }

    /// Write the current output to `dir/dot-art.png`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when nothing is
    /// loaded.
    pub fn export_to_dir(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(bytes) = self.export_png()? else {
            debug!("export_to_dir: nothing to export");
            return Ok(None);
        };
        fs::create_dir_all(dir).map_err(|e| DotArtError::io(dir, e))?;
        let path = dir.join(EXPORT_FILE_NAME);
        fs::write(&path, bytes).map_err(|e| DotArtError::io(&path, e))?;
        debug!("export_to_dir: wrote {}", path.display());
        Ok(Some(path))
    }

    fn rerender(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        let (canvas, report) = render_dot_art_with_report(&source.as_view(), self.params);
        self.output = Some(canvas);
        self.last_report = Some(report);
    }
}
