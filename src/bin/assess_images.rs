use doc_quality::assess::{collect_image_paths, write_csv_report, ImageReport, QualityAssessor};
use doc_quality::blur::BlurLabel;
use doc_quality::config::assess;
use doc_quality::image::io::write_json_file;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = assess::load_config(Path::new(&config_path))?;

    let paths = collect_image_paths(&config.input_dir)?;
    if paths.is_empty() {
        return Err(format!("No images found in {}", config.input_dir.display()));
    }
    println!("Found {} images to process", paths.len());

    let start = Instant::now();
    let assessor = QualityAssessor::new(config.params);
    let rows = assessor.assess_batch(&paths);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = AssessReport::new(rows, elapsed_ms);
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Assessed {} images ({} blur, {} clear, {} failed) in {:.1} ms",
        report.processed, report.blur, report.clear, report.failed, report.elapsed_ms
    );
    println!("Saved report to {}", config.output.report_json.display());
    if let Some(csv_path) = &config.output.report_csv {
        write_csv_report(csv_path, &report.rows)?;
        println!("Saved results table to {}", csv_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: assess_images <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessReport {
    processed: usize,
    blur: usize,
    clear: usize,
    failed: usize,
    elapsed_ms: f64,
    rows: Vec<ImageReport>,
}

impl AssessReport {
    fn new(rows: Vec<ImageReport>, elapsed_ms: f64) -> Self {
        let count = |label: BlurLabel| {
            rows.iter()
                .filter(|r| r.assessment.is_some_and(|a| a.blur_label == label))
                .count()
        };
        Self {
            processed: rows.len(),
            blur: count(BlurLabel::Blur),
            clear: count(BlurLabel::Clear),
            failed: rows.iter().filter(|r| r.error.is_some()).count(),
            elapsed_ms,
            rows,
        }
    }
}
