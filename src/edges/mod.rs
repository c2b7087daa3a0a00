//! Edge extraction shared by the sharpness and angle metrics.
//!
//! Pipeline, deterministic for a given image:
//!
//! 1. Luminance conversion (see `image::to_luminance`).
//! 2. 5×5 Gaussian smoothing (`[1, 4, 6, 4, 1] / 16` along both axes), rounded
//!    back to 8-bit levels.
//! 3. Sobel gradients with L1 magnitude.
//! 4. Direction-aligned non-maximum suppression.
//! 5. Hysteresis: maxima above the high threshold seed edges, maxima above the
//!    low threshold join only when 8-connected to a seed.
//!
//! Smoothing reflects borders without repeating the edge sample; the Sobel
//! stage clamps to the outermost samples.

pub mod grad;
pub mod hysteresis;
pub mod map;
pub mod nms;

pub use grad::{sobel_gradients, Grad};
pub use map::{EdgeMap, EdgeMapSummary};

use crate::error::Result;
use crate::filters::{apply_separable, GAUSSIAN_5TAP};
use crate::image::{to_luminance, ImageF32, RasterImage};
use crate::params::EdgeParams;
use serde::Serialize;
use std::time::Instant;

/// Binary edge map producer.
#[derive(Clone, Debug, Default)]
pub struct EdgeExtractor {
    pub params: EdgeParams,
}

/// Edge map together with per-stage timings, for tooling.
#[derive(Clone, Debug)]
pub struct EdgeExtraction {
    pub map: EdgeMap,
    pub timings: EdgeTimings,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeTimings {
    pub smoothing_ms: f64,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

impl EdgeExtractor {
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    /// Fails only when the raster is invalid (zero area or short buffer).
    pub fn extract(&self, image: &RasterImage<'_>) -> Result<EdgeMap> {
        let gray = to_luminance(image)?;
        Ok(self.extract_luminance(&gray))
    }

    /// Edge map of an already converted luminance image.
    pub fn extract_luminance(&self, gray: &ImageF32) -> EdgeMap {
        self.extract_timed(gray).map
    }

    pub fn extract_timed(&self, gray: &ImageF32) -> EdgeExtraction {
        let (low, high) = self.params.ordered();

        let start = Instant::now();
        let mut smoothed = apply_separable(&GAUSSIAN_5TAP, gray);
        smoothed.quantize_u8();
        let smoothing_ms = elapsed_ms(start);

        let start = Instant::now();
        let grad = sobel_gradients(&smoothed);
        let gradient_ms = elapsed_ms(start);

        let start = Instant::now();
        let classes = nms::classify_maxima(&grad, low, high);
        let nms_ms = elapsed_ms(start);

        let start = Instant::now();
        let map = hysteresis::link_edges(&classes, gray.w, gray.h);
        let hysteresis_ms = elapsed_ms(start);

        EdgeExtraction {
            map,
            timings: EdgeTimings {
                smoothing_ms,
                gradient_ms,
                nms_ms,
                hysteresis_ms,
            },
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_image(size: usize, lo: usize, hi: usize) -> Vec<u8> {
        let mut data = vec![0u8; size * size];
        for y in lo..hi {
            for x in lo..hi {
                data[y * size + x] = 255;
            }
        }
        data
    }

    #[test]
    fn flat_image_has_no_edges() {
        let data = vec![128u8; 32 * 32];
        let map = EdgeExtractor::default()
            .extract(&RasterImage::gray(32, 32, &data))
            .expect("valid raster");
        assert_eq!(map.count(), 0);
    }

    #[test]
    fn zero_area_raster_is_rejected() {
        let err = EdgeExtractor::default()
            .extract(&RasterImage::gray(10, 0, &[]))
            .unwrap_err();
        assert!(err.is_invalid_image());
    }

    #[test]
    fn square_outline_is_detected_inside_its_bounds() {
        let data = square_image(40, 10, 30);
        let map = EdgeExtractor::default()
            .extract(&RasterImage::gray(40, 40, &data))
            .expect("valid raster");
        assert!(map.count() > 60, "expected an outline, got {}", map.count());
        for (x, y) in map.iter_set() {
            assert!((7..33).contains(&x) && (7..33).contains(&y), "({x},{y})");
        }
        assert!(!map.get(20, 20), "square interior must stay empty");
    }

    #[test]
    fn extraction_is_deterministic() {
        let data = square_image(24, 5, 17);
        let raster = RasterImage::gray(24, 24, &data);
        let extractor = EdgeExtractor::default();
        let a = extractor.extract(&raster).expect("valid raster");
        let b = extractor.extract(&raster).expect("valid raster");
        assert_eq!(a, b);
    }
}
