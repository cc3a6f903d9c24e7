use super::circle::fill_disc;
use super::grid::CellGrid;
use super::params::RenderParams;
use crate::color::ColorMode;
use crate::image::{DotCanvas, ImageRgb8};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Summary of a single render pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub color_mode: ColorMode,
    pub cell_count: usize,
    pub covered_pixels: usize,
    pub latency_ms: f64,
}

/// Render `source` as dot art.
///
/// Pure: the output depends only on the source pixels and `params`, and has
/// the same dimensions as the source for every cell size.
pub fn render_dot_art(source: &ImageRgb8<'_>, params: RenderParams) -> DotCanvas {
    render_dot_art_with_report(source, params).0
}

/// Same as [`render_dot_art`], also returning a [`RenderReport`].
pub fn render_dot_art_with_report(
    source: &ImageRgb8<'_>,
    params: RenderParams,
) -> (DotCanvas, RenderReport) {
    let t0 = Instant::now();
    let mut canvas = DotCanvas::new(source.w, source.h);
    let step = params.cell_size.step();
    let radius = params.cell_size.radius();

    let grid = CellGrid::new(source.w, source.h, step);
    let cell_count = grid.cell_count();
    let mut covered_pixels = 0usize;
    for anchor in grid {
        // One sample per cell, taken at the anchor.
        let sampled = source.get(anchor.x, anchor.y);
        let color = params.color_mode.apply(sampled);
        let cx = anchor.x as f32 + radius;
        let cy = anchor.y as f32 + radius;
        covered_pixels += fill_disc(&mut canvas, cx, cy, radius, color.opaque());
    }

    let latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "render_dot_art {}x{} cell={} mode={} cells={} covered={} {:.3}ms",
        source.w,
        source.h,
        params.cell_size.get(),
        params.color_mode,
        cell_count,
        covered_pixels,
        latency_ms
    );
    let report = RenderReport {
        width: source.w,
        height: source.h,
        cell_size: params.cell_size.get(),
        color_mode: params.color_mode,
        cell_count,
        covered_pixels,
        latency_ms,
    };
    (canvas, report)
}
