use dot_art::color::{ColorMode, Rgb};
use dot_art::image::RgbImageU8;
use dot_art::render::{render_dot_art_with_report, CellSize, RenderParams};

fn main() {
    env_logger::init();
    // Demo stub: renders a synthetic gradient in every colour mode
    let w = 320usize;
    let h = 240usize;
    let data = (0..h)
        .flat_map(|y| {
            (0..w).map(move |x| Rgb::new((x * 255 / w) as u8, (y * 255 / h) as u8, 128))
        })
        .collect();
    let Some(img) = RgbImageU8::new(w, h, data) else {
        eprintln!("Error: gradient buffer does not match {w}x{h}");
        std::process::exit(1);
    };

    for mode in ColorMode::ALL {
        let params = RenderParams::new(CellSize::DEFAULT, mode);
        let (canvas, report) = render_dot_art_with_report(&img.as_view(), params);
        println!(
            "mode={:<10} cells={} covered={}/{} latency_ms={:.3}",
            mode.name(),
            report.cell_count,
            canvas.covered_pixels(),
            w * h,
            report.latency_ms
        );
    }
}
