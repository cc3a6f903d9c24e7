mod common;

use common::synthetic_image::{checkerboard_rgb, noise_rgb};
use dot_art::image::io::encode_png;
use dot_art::image::ImageView;
use dot_art::render::CellGrid;
use dot_art::{render_dot_art, CellSize, ColorMode, RenderParams, Rgb};

fn all_cell_sizes() -> impl Iterator<Item = CellSize> {
    (CellSize::MIN..=CellSize::MAX).map(|v| CellSize::new(v).unwrap())
}

/// Colour at the centre pixel of the cell anchored at `(x, y)`, clipped.
fn dot_centre(x: usize, y: usize, size: CellSize, w: usize, h: usize) -> (usize, usize) {
    let half = size.step() / 2;
    ((x + half).min(w - 1), (y + half).min(h - 1))
}

#[test]
fn output_matches_source_dimensions_for_every_cell_size() {
    let src = noise_rgb(37, 23, 7);
    for size in all_cell_sizes() {
        for mode in ColorMode::ALL {
            let out = render_dot_art(&src.as_view(), RenderParams::new(size, mode));
            assert_eq!(out.dimensions(), (37, 23), "size={} mode={mode}", size.get());
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let src = noise_rgb(64, 48, 42);
    for mode in ColorMode::ALL {
        let params = RenderParams::new(CellSize::new(7).unwrap(), mode);
        let a = render_dot_art(&src.as_view(), params);
        let b = render_dot_art(&src.as_view(), params);
        assert_eq!(a, b, "mode={mode}");
        assert_eq!(encode_png(&a).unwrap(), encode_png(&b).unwrap(), "mode={mode}");
    }
}

#[test]
fn color_mode_reproduces_each_sampled_pixel() {
    let src = noise_rgb(50, 30, 3);
    let view = src.as_view();
    let size = CellSize::new(6).unwrap();
    let out = render_dot_art(&view, RenderParams::new(size, ColorMode::Color));
    for anchor in CellGrid::new(50, 30, size.step()) {
        let (cx, cy) = dot_centre(anchor.x, anchor.y, size, 50, 30);
        assert_eq!(out.get(cx, cy), view.get(anchor.x, anchor.y).opaque());
    }
}

#[test]
fn inverted_output_inverts_the_sample() {
    let src = noise_rgb(40, 40, 11);
    let view = src.as_view();
    let size = CellSize::new(8).unwrap();
    let out = render_dot_art(&view, RenderParams::new(size, ColorMode::Inverted));
    for anchor in CellGrid::new(40, 40, size.step()) {
        let s = view.get(anchor.x, anchor.y);
        let (cx, cy) = dot_centre(anchor.x, anchor.y, size, 40, 40);
        let [r, g, b, a] = out.get(cx, cy);
        assert_eq!(a, 255);
        let inverted = Rgb::new(r, g, b);
        assert_eq!(inverted, Rgb::new(255 - s.r, 255 - s.g, 255 - s.b));
        assert_eq!(ColorMode::Inverted.apply(inverted), s);
    }
}

#[test]
fn blackwhite_output_is_binary() {
    let src = noise_rgb(45, 33, 99);
    for size in all_cell_sizes() {
        let out = render_dot_art(&src.as_view(), RenderParams::new(size, ColorMode::BlackWhite));
        for px in out.data.iter().filter(|px| px[3] != 0) {
            assert!(
                *px == [0, 0, 0, 255] || *px == [255, 255, 255, 255],
                "size={} px={px:?}",
                size.get()
            );
        }
    }
}

#[test]
fn checkerboard_aligned_to_cells_alternates_dots() {
    let a = Rgb::new(32, 32, 32);
    let b = Rgb::new(220, 220, 220);
    let src = checkerboard_rgb(40, 40, 10, a, b);
    let size = CellSize::new(10).unwrap();
    let out = render_dot_art(&src.as_view(), RenderParams::new(size, ColorMode::Color));
    assert_eq!(out.get(5, 5), a.opaque());
    assert_eq!(out.get(15, 5), b.opaque());
    assert_eq!(out.get(15, 15), a.opaque());
}

#[test]
fn sepia_dots_use_the_matrix_on_the_sample() {
    let src = noise_rgb(20, 20, 5);
    let view = src.as_view();
    let size = CellSize::new(5).unwrap();
    let out = render_dot_art(&view, RenderParams::new(size, ColorMode::Sepia));
    for anchor in CellGrid::new(20, 20, size.step()) {
        let expected = ColorMode::Sepia.apply(view.get(anchor.x, anchor.y));
        assert_eq!(out.get(anchor.x + 2, anchor.y + 2), expected.opaque());
    }
}
