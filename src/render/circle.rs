//! Filled-disc rasterization without anti-aliasing.
//!
//! A pixel `(px, py)` is covered when its centre `(px + 0.5, py + 0.5)` lies
//! inside or on the circle. For a disc of radius `s/2` centred in an `s × s`
//! cell this never touches pixels outside the cell, so neighbouring dots do
//! not overlap and draw order does not matter.

use crate::image::ImageViewMut;

/// Fill the disc `(cx, cy, radius)` with `value`, clipped to the image.
///
/// Returns the number of pixels written.
pub fn fill_disc<I: ImageViewMut>(
    image: &mut I,
    cx: f32,
    cy: f32,
    radius: f32,
    value: I::Pixel,
) -> usize {
    if radius <= 0.0 {
        return 0;
    }
    let (w, h) = (image.width(), image.height());
    let r2 = radius * radius;
    let y0 = (cy - radius).floor().max(0.0) as usize;
    let y1 = ((cy + radius).ceil().max(0.0) as usize).min(h);

    let mut written = 0;
    for y in y0..y1 {
        let dy = y as f32 + 0.5 - cy;
        let rem = r2 - dy * dy;
        if rem < 0.0 {
            continue;
        }
        // Centres px + 0.5 within [cx - half, cx + half].
        let half = rem.sqrt();
        let x0 = (cx - half - 0.5).ceil().max(0.0) as usize;
        let x1 = ((cx + half - 0.5).floor() + 1.0).max(0.0) as usize;
        let x1 = x1.min(w);
        if x0 < x1 {
            image.fill_span(y, x0, x1, value);
            written += x1 - x0;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{DotCanvas, ImageView, TRANSPARENT};

    const RED: [u8; 4] = [255, 0, 0, 255];

    fn mask(canvas: &DotCanvas) -> Vec<String> {
        (0..canvas.height())
            .map(|y| {
                canvas
                    .row(y)
                    .iter()
                    .map(|px| if px[3] == 0 { '.' } else { '#' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn size_two_cell_is_fully_covered() {
        let mut canvas = DotCanvas::new(4, 2);
        let n = fill_disc(&mut canvas, 1.0, 1.0, 1.0, RED);
        assert_eq!(n, 4);
        assert_eq!(mask(&canvas), vec!["##..", "##.."]);
    }

    #[test]
    fn size_five_disc_shape() {
        let mut canvas = DotCanvas::new(5, 5);
        fill_disc(&mut canvas, 2.5, 2.5, 2.5, RED);
        assert_eq!(
            mask(&canvas),
            vec![".###.", "#####", "#####", "#####", ".###."]
        );
    }

    #[test]
    fn disc_is_clipped_at_edges() {
        let mut canvas = DotCanvas::new(3, 3);
        let n = fill_disc(&mut canvas, 3.0, 3.0, 2.0, RED);
        assert_eq!(mask(&canvas), vec!["...", "..#", ".##"]);
        assert_eq!(n, 3);
    }

    #[test]
    fn disc_stays_inside_its_cell() {
        for size in 2..=20usize {
            let mut canvas = DotCanvas::new(size + 2, size + 2);
            let r = size as f32 / 2.0;
            fill_disc(&mut canvas, 1.0 + r, 1.0 + r, r, RED);
            for y in 0..canvas.h {
                for x in 0..canvas.w {
                    let inside = (1..=size).contains(&x) && (1..=size).contains(&y);
                    if !inside {
                        assert_eq!(canvas.get(x, y), TRANSPARENT, "size={size} x={x} y={y}");
                    }
                }
            }
        }
    }
}
