use crate::color::ColorMode;
use crate::render::{CellSize, RenderParams};
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DotArtToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub render: RenderConfig,
    pub output: DotArtOutputConfig,
}

/// Raw render settings; the cell size is clamped on [`resolve`](Self::resolve).
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub cell_size: u32,
    pub color_mode: ColorMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: CellSize::DEFAULT.get(),
            color_mode: ColorMode::default(),
        }
    }
}

impl RenderConfig {
    pub fn resolve(&self) -> RenderParams {
        let cell_size = CellSize::clamped(self.cell_size);
        if cell_size.get() != self.cell_size {
            warn!("config cellSize {} clamped to {}", self.cell_size, cell_size.get());
        }
        RenderParams::new(cell_size, self.color_mode)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotArtOutputConfig {
    /// Directory receiving `dot-art.png`.
    pub dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DotArtToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<DotArtToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_section_defaults() {
        let cfg = parse_config(r#"{"input": "in.png", "output": {"dir": "out"}}"#).unwrap();
        assert_eq!(cfg.render.resolve(), RenderParams::default());
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn cell_size_is_clamped_on_resolve() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "render": {"cellSize": 64, "colorMode": "blackwhite"},
                "output": {"dir": "out", "reportJson": "out/report.json"}
            }"#,
        )
        .unwrap();
        let params = cfg.render.resolve();
        assert_eq!(params.cell_size.get(), 20);
        assert_eq!(params.color_mode, ColorMode::BlackWhite);
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn unknown_color_mode_is_rejected() {
        let res = parse_config(
            r#"{"input": "in.png", "render": {"colorMode": "neon"}, "output": {"dir": "out"}}"#,
        );
        assert!(res.is_err());
    }
}
