#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod assess;
pub mod blur;
pub mod error;
pub mod image;
pub mod lines;
pub mod params;

// Building blocks, public for tools and experiments.
pub mod angle;
pub mod config;
pub mod edges;
pub mod filters;

// --- High-level re-exports -------------------------------------------------

pub use crate::assess::{ImageAssessment, ImageReport, QualityAssessor};
pub use crate::blur::{BlurAssessment, BlurLabel, BlurScorer};
pub use crate::edges::{EdgeExtractor, EdgeMap};
pub use crate::error::QualityError;
pub use crate::lines::{AngleAssessment, LineAngleEstimator, NO_EVIDENCE_ANGLE};
pub use crate::params::{BlurParams, EdgeParams, LineParams, QualityParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{PixelFormat, RasterImage};
    pub use crate::{
        BlurLabel, BlurScorer, LineAngleEstimator, QualityAssessor, QualityError, QualityParams,
    };
}
