use doc_quality::blur::{external_regions, ContourRegion};
use doc_quality::config::edge_map;
use doc_quality::edges::{EdgeExtractor, EdgeMapSummary, EdgeTimings};
use doc_quality::image::io::{load_raster, save_edge_map_png, write_json_file};
use doc_quality::image::to_luminance;
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
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = edge_map::load_config(Path::new(&config_path))?;

    let raster = load_raster(&config.input).map_err(|e| e.to_string())?;
    let gray = to_luminance(&raster.as_view()).map_err(|e| e.to_string())?;
    let extraction = EdgeExtractor::new(config.edges).extract_timed(&gray);
    let regions = external_regions(&extraction.map);

    let summary = EdgeMapReport {
        map: EdgeMapSummary::from(&extraction.map),
        low_threshold: config.edges.low_threshold,
        high_threshold: config.edges.high_threshold,
        external_contours: regions.len(),
        regions,
        timings: extraction.timings,
    };

    save_edge_map_png(&extraction.map, &config.output.edge_image)?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved edge map ({} edge pixels) to {}",
        summary.map.edge_pixels,
        config.output.edge_image.display()
    );
    println!(
        "Saved {} external contours to {}",
        summary.external_contours,
        config.output.summary_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeMapReport {
    map: EdgeMapSummary,
    low_threshold: f32,
    high_threshold: f32,
    external_contours: usize,
    regions: Vec<ContourRegion>,
    timings: EdgeTimings,
}
