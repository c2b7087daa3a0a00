//! Sharpness scoring.
//!
//! The score is the population variance of the Laplacian response of the
//! luminance image: flat or defocused images give a near-uniform response,
//! fine detail gives a wide one. Scores below `sharpness_threshold` are
//! labelled blur immediately. Otherwise the edge map is computed and its
//! external contours counted as a proxy for the number of distinct content
//! regions; at most `max_blurry_box_count` of them still counts as blur.

pub mod contours;

pub use contours::{count_external_contours, external_regions, ContourRegion};

use crate::edges::EdgeExtractor;
use crate::error::Result;
use crate::filters::laplacian;
use crate::image::{to_luminance, ImageF32, ImageView, RasterImage};
use crate::params::{BlurParams, EdgeParams};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurLabel {
    Blur,
    Clear,
}

impl fmt::Display for BlurLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlurLabel::Blur => "blur",
            BlurLabel::Clear => "clear",
        })
    }
}

/// Sharpness score (Laplacian variance, `>= 0`) and its label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlurAssessment {
    pub score: f64,
    pub label: BlurLabel,
}

/// Assessment plus the contour count behind it; `box_count` is `None` when the
/// variance cutoff decided on its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurReport {
    pub assessment: BlurAssessment,
    pub box_count: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct BlurScorer {
    params: BlurParams,
    edges: EdgeExtractor,
}

impl BlurScorer {
    pub fn new(params: BlurParams, edge_params: EdgeParams) -> Self {
        Self {
            params,
            edges: EdgeExtractor::new(edge_params),
        }
    }

    pub fn params(&self) -> &BlurParams {
        &self.params
    }

    pub fn score(&self, image: &RasterImage<'_>) -> Result<BlurAssessment> {
        Ok(self.score_detailed(image)?.assessment)
    }

    pub fn score_detailed(&self, image: &RasterImage<'_>) -> Result<BlurReport> {
        let gray = to_luminance(image)?;
        let score = laplacian_variance(&gray);

        if score < self.params.sharpness_threshold {
            return Ok(BlurReport {
                assessment: BlurAssessment {
                    score,
                    label: BlurLabel::Blur,
                },
                box_count: None,
            });
        }

        let edge_map = self.edges.extract_luminance(&gray);
        let box_count = count_external_contours(&edge_map);
        let label = if box_count <= self.params.max_blurry_box_count {
            BlurLabel::Blur
        } else {
            BlurLabel::Clear
        };

        Ok(BlurReport {
            assessment: BlurAssessment { score, label },
            box_count: Some(box_count),
        })
    }
}

/// Population variance of the Laplacian response; `0.0` for an empty image.
pub fn laplacian_variance(gray: &ImageF32) -> f64 {
    let response = laplacian(gray);
    let n = response.w * response.h;
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = response
        .rows()
        .flat_map(|row| row.iter())
        .map(|&v| v as f64)
        .sum();
    let mean = sum / n as f64;
    let sq: f64 = response
        .rows()
        .flat_map(|row| row.iter())
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    (sq / n as f64).max(0.0)
}
