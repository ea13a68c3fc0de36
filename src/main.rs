use line_measure::config::load_config;
use line_measure::image::io::{load_image, save_gray, save_rgba, write_json_file};
use line_measure::{
    convert_to_grayscale, draw_lines_with_style, library_version, LineDetector, LineSegment,
};
use log::info;
use serde::Serialize;
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
    let arg = env::args().nth(1).ok_or_else(usage)?;
    if arg == "--version" {
        println!("line_measure {}", library_version());
        return Ok(());
    }
    let config = load_config(Path::new(&arg)).map_err(|e| e.to_string())?;

    let image = load_image(&config.input).map_err(|e| e.to_string())?;
    let detector = LineDetector::new(config.detector);
    let report = detector.detect(&image);
    info!(
        "detected {} segments in {:.3} ms",
        report.lines.len(),
        report.latency_ms
    );

    if let Some(path) = &config.output.grayscale_image {
        save_gray(&convert_to_grayscale(&image), path).map_err(|e| e.to_string())?;
        println!("Saved grayscale image to {}", path.display());
    }

    let overlay = draw_lines_with_style(&image, &report.lines, config.selected_index, &config.draw);
    save_rgba(&overlay, &config.output.overlay_image).map_err(|e| e.to_string())?;

    let summary = LinesReport {
        version: library_version(),
        image_size: report.image_size,
        latency_ms: report.latency_ms,
        selected_index: config.selected_index,
        lines: &report.lines,
    };
    write_json_file(&config.output.lines_json, &summary).map_err(|e| e.to_string())?;

    println!(
        "Saved overlay to {}",
        config.output.overlay_image.display()
    );
    println!(
        "Saved {} line segments to {}",
        report.lines.len(),
        config.output.lines_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: line_measure <config.json> | --version".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LinesReport<'a> {
    version: &'static str,
    image_size: [usize; 2],
    latency_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_index: Option<usize>,
    lines: &'a [LineSegment],
}
