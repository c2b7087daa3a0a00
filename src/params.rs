//! Tunable constants of the quality metrics.
//!
//! Defaults: Canny-style thresholds 50/150, sharpness cutoff 300, at most 8
//! external contours still counting as blur, Hough votes 80 / minimum length
//! 50 px / maximum gap 10 px, and a 10° noise band around horizontal.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters for every stage, injected into the scorers at construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityParams {
    pub edges: EdgeParams,
    pub blur: BlurParams,
    pub lines: LineParams,
}

impl QualityParams {
    /// Read parameters from a JSON file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read params {}: {e}", path.display()))?;
        serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse params {}: {e}", path.display()))
    }
}

/// Hysteresis thresholds on the L1 Sobel magnitude of the smoothed image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

impl EdgeParams {
    /// Thresholds ordered as `(low, high)` even when configured in reverse.
    pub fn ordered(&self) -> (f32, f32) {
        if self.low_threshold <= self.high_threshold {
            (self.low_threshold, self.high_threshold)
        } else {
            (self.high_threshold, self.low_threshold)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    /// Laplacian variance below this value is labelled blur without looking
    /// at the edge structure.
    pub sharpness_threshold: f64,
    /// Images with at most this many external contours are labelled blur.
    ///
    /// Empirical cutoff; recalibrate against labelled scans before changing it.
    pub max_blurry_box_count: usize,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            sharpness_threshold: 300.0,
            max_blurry_box_count: 8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Accumulator votes needed before a line is walked.
    pub vote_threshold: u32,
    /// Minimum x or y extent of an accepted segment, in pixels.
    pub min_line_length: u32,
    /// Maximum run of missing edge pixels bridged inside a segment.
    pub max_line_gap: u32,
    /// Orientations within this many degrees of horizontal are dropped:
    /// `[0, band]` and `[180 - band, 180)`.
    pub noise_band_deg: f64,
    /// Seed of the point visiting order of the probabilistic transform.
    pub rng_seed: u64,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            vote_threshold: 80,
            min_line_length: 50,
            max_line_gap: 10,
            noise_band_deg: 10.0,
            rng_seed: 0xffff_ffff,
        }
    }
}
