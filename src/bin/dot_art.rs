//! Render one image as dot art from a JSON config.
//!
//! ```json
//! {
//!   "input": "photo.jpg",
//!   "render": { "cellSize": 8, "colorMode": "sepia" },
//!   "output": { "dir": "out", "reportJson": "out/report.json" }
//! }
//! ```
//!
//! Writes `<output.dir>/dot-art.png` and, when requested, the render report.

use dot_art::config::dot_art::load_config;
use dot_art::image::io::write_json_file;
use dot_art::session::DotArtSession;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut session = DotArtSession::new(config.render.resolve());
    session
        .select_file(Some(config.input.as_path()))
        .map_err(|e| e.to_string())?;

    let saved = session
        .export_to_dir(&config.output.dir)
        .map_err(|e| e.to_string())?
        .ok_or("Nothing rendered")?;
    println!("Saved dot art to {}", saved.display());

    if let (Some(path), Some(report)) = (&config.output.report_json, session.last_report()) {
        write_json_file(path, report).map_err(|e| e.to_string())?;
        println!(
            "Saved report to {} ({} cells, {:.2} ms)",
            path.display(),
            report.cell_count,
            report.latency_ms
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: dot_art <config.json>".to_string()
}
