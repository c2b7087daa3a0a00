//! Per-image assessment rows and a parallel batch driver.
//!
//! Each image is scored independently; a failure is recorded on that image's
//! row and never stops the rest of the batch. Rows can be written out as a
//! CSV table with `write_csv_report`.
use crate::blur::{BlurLabel, BlurScorer};
use crate::error::Result;
use crate::image::io::{ensure_parent_dir, load_raster};
use crate::image::RasterImage;
use crate::lines::LineAngleEstimator;
use crate::params::QualityParams;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions picked up by `collect_image_paths` (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "tif"];

/// The three per-image metrics consumed downstream.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ImageAssessment {
    pub detected_blur: f64,
    pub blur_label: BlurLabel,
    pub detected_angle: f64,
}

/// Batch row: the assessment, or the reason the image was skipped.
#[derive(Clone, Debug, Serialize)]
pub struct ImageReport {
    pub image_name: String,
    #[serde(flatten)]
    pub assessment: Option<ImageAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct QualityAssessor {
    blur: BlurScorer,
    angle: LineAngleEstimator,
}

impl QualityAssessor {
    pub fn new(params: QualityParams) -> Self {
        Self {
            blur: BlurScorer::new(params.blur, params.edges),
            angle: LineAngleEstimator::new(params.lines, params.edges),
        }
    }

    pub fn assess(&self, image: &RasterImage<'_>) -> Result<ImageAssessment> {
        let blur = self.blur.score(image)?;
        let angle = self.angle.estimate(image)?;
        Ok(ImageAssessment {
            detected_blur: blur.score,
            blur_label: blur.label,
            detected_angle: angle.angle,
        })
    }

    pub fn assess_path(&self, path: &Path) -> Result<ImageAssessment> {
        let raster = load_raster(path)?;
        self.assess(&raster.as_view())
    }

    /// Assess `paths` in parallel; rows come back in input order.
    pub fn assess_batch(&self, paths: &[PathBuf]) -> Vec<ImageReport> {
        paths
            .par_iter()
            .map(|path| {
                let image_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                match self.assess_path(path) {
                    Ok(assessment) => ImageReport {
                        image_name,
                        assessment: Some(assessment),
                        error: None,
                    },
                    Err(err) => {
                        warn!("skipping {}: {err}", path.display());
                        ImageReport {
                            image_name,
                            assessment: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect()
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to list {}: {e}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?
            .path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// CSV record; failed images keep their name and leave the metrics empty.
#[derive(Serialize)]
struct CsvRow<'a> {
    image_name: &'a str,
    detected_blur: Option<f64>,
    blur_label: Option<BlurLabel>,
    detected_angle: Option<f64>,
}

impl<'a> From<&'a ImageReport> for CsvRow<'a> {
    fn from(row: &'a ImageReport) -> Self {
        Self {
            image_name: &row.image_name,
            detected_blur: row.assessment.map(|a| a.detected_blur),
            blur_label: row.assessment.map(|a| a.blur_label),
            detected_angle: row.assessment.map(|a| a.detected_angle),
        }
    }
}

/// Write `rows` as CSV with the columns
/// `image_name,detected_blur,blur_label,detected_angle`.
pub fn write_csv_report(path: &Path, rows: &[ImageReport]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to create CSV {}: {e}", path.display()))?;
    for row in rows {
        writer
            .serialize(CsvRow::from(row))
            .map_err(|e| format!("Failed to write CSV {}: {e}", path.display()))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to write CSV {}: {e}", path.display()))
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(has_image_extension(Path::new("a/card.PNG")));
        assert!(has_image_extension(Path::new("scan.Tif")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("README")));
    }

    #[test]
    fn batch_keeps_going_after_a_bad_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("a_good.png");
        GrayImage::from_pixel(40, 30, Luma([0])).save(&good).expect("save");
        let bad = dir.path().join("b_bad.jpg");
        fs::write(&bad, b"not an image").expect("write");
        fs::write(dir.path().join("c_notes.txt"), b"ignored").expect("write");

        let paths = collect_image_paths(dir.path()).expect("listing");
        assert_eq!(paths, vec![good, bad]);

        let rows = QualityAssessor::default().assess_batch(&paths);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].image_name, "a_good.png");
        let first = rows[0].assessment.expect("flat image is assessable");
        assert_eq!(first.detected_blur, 0.0);
        assert_eq!(first.blur_label, BlurLabel::Blur);
        assert_eq!(first.detected_angle, 0.0);
        assert!(rows[1].assessment.is_none());
        assert!(rows[1].error.is_some());
    }

    #[test]
    fn report_row_uses_flat_field_names() {
        let row = ImageReport {
            image_name: "x.png".into(),
            assessment: Some(ImageAssessment {
                detected_blur: 512.0,
                blur_label: BlurLabel::Clear,
                detected_angle: 90.5,
            }),
            error: None,
        };
        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json["detected_blur"], 512.0);
        assert_eq!(json["blur_label"], "clear");
        assert_eq!(json["detected_angle"], 90.5);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn csv_report_has_one_line_per_image() {
        let rows = vec![
            ImageReport {
                image_name: "a.png".into(),
                assessment: Some(ImageAssessment {
                    detected_blur: 512.0,
                    blur_label: BlurLabel::Clear,
                    detected_angle: 90.5,
                }),
                error: None,
            },
            ImageReport {
                image_name: "b.jpg".into(),
                assessment: None,
                error: Some("unreadable".into()),
            },
        ];
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("results.csv");
        write_csv_report(&path, &rows).expect("write csv");

        let text = fs::read_to_string(&path).expect("read csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "image_name,detected_blur,blur_label,detected_angle",
                "a.png,512.0,clear,90.5",
                "b.jpg,,,",
            ]
        );
    }
}
