//! Dominant line angle estimation.
//!
//! Pipeline
//! - Edge map from `EdgeExtractor`.
//! - Probabilistic Hough segments (`hough::detect_segments`).
//! - Segment orientations folded into [0°, 180°); orientations within
//!   `noise_band_deg` of horizontal are dropped as frame or table edges.
//! - Survivors binned into a 1° `AngleHistogram`; the dominant angle is the
//!   centre of the fullest bin, ties going to the lowest angle.
//!
//! No segments, or none surviving the filter, yields the sentinel angle 0.

pub mod histogram;
pub mod hough;
pub mod segment;

pub use histogram::{AngleHistogram, ANGLE_BINS};
pub use hough::{detect_segments, HoughOptions};
pub use segment::LineSegment;

use crate::angle::is_near_horizontal;
use crate::edges::EdgeExtractor;
use crate::error::Result;
use crate::image::RasterImage;
use crate::params::{EdgeParams, LineParams};
use log::debug;
use serde::{Deserialize, Serialize};

/// Angle reported when there is no usable line evidence.
pub const NO_EVIDENCE_ANGLE: f64 = 0.0;

/// Dominant document rotation, always in [0°, 180°).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleAssessment {
    pub angle: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleReport {
    pub assessment: AngleAssessment,
    pub segments: Vec<LineSegment>,
    /// Orientations left after the near-horizontal filter.
    pub kept_angles: usize,
}

#[derive(Clone, Debug, Default)]
pub struct LineAngleEstimator {
    params: LineParams,
    edges: EdgeExtractor,
}

impl LineAngleEstimator {
    pub fn new(params: LineParams, edge_params: EdgeParams) -> Self {
        Self {
            params,
            edges: EdgeExtractor::new(edge_params),
        }
    }

    pub fn params(&self) -> &LineParams {
        &self.params
    }

    pub fn estimate(&self, image: &RasterImage<'_>) -> Result<AngleAssessment> {
        Ok(self.estimate_detailed(image)?.assessment)
    }

    pub fn estimate_detailed(&self, image: &RasterImage<'_>) -> Result<AngleReport> {
        let edge_map = self.edges.extract(image)?;
        let segments = detect_segments(&edge_map, &self.hough_options());
        if segments.is_empty() {
            debug!(
                "line angle: no segments on {}x{} ({} edge pixels)",
                edge_map.width(),
                edge_map.height(),
                edge_map.count()
            );
            return Ok(AngleReport {
                assessment: AngleAssessment {
                    angle: NO_EVIDENCE_ANGLE,
                },
                segments,
                kept_angles: 0,
            });
        }

        let (angle, kept_angles) = dominant_angle(&segments, self.params.noise_band_deg);
        if kept_angles == 0 {
            debug!(
                "line angle: all {} segments within {:.1} deg of horizontal",
                segments.len(),
                self.params.noise_band_deg
            );
        }

        Ok(AngleReport {
            assessment: AngleAssessment { angle },
            segments,
            kept_angles,
        })
    }

    fn hough_options(&self) -> HoughOptions {
        HoughOptions {
            vote_threshold: self.params.vote_threshold,
            min_line_length: self.params.min_line_length,
            max_line_gap: self.params.max_line_gap,
            rng_seed: self.params.rng_seed,
        }
    }
}

/// Histogram-argmax orientation of `segments` after dropping near-horizontal
/// ones; returns the angle and the number of orientations that were binned.
pub fn dominant_angle(segments: &[LineSegment], noise_band_deg: f64) -> (f64, usize) {
    let mut hist = AngleHistogram::new();
    for segment in segments {
        let angle = segment.orientation_deg();
        if !is_near_horizontal(angle, noise_band_deg) {
            hist.accumulate(angle);
        }
    }
    let angle = hist.dominant().unwrap_or(NO_EVIDENCE_ANGLE);
    (angle, hist.total() as usize)
}
