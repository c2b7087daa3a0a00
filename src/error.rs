use std::path::PathBuf;
use thiserror::Error;

/// Per-image failure reported by the quality metrics.
///
/// Missing edges or lines are not errors: the estimators fall back to their
/// documented sentinels instead.
#[derive(Debug, Error)]
pub enum QualityError {
    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("unreadable image {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl QualityError {
    /// Both zero-area buffers and undecodable files count as invalid input.
    pub fn is_invalid_image(&self) -> bool {
        matches!(self, Self::InvalidImage(_) | Self::Unreadable { .. })
    }
}

pub type Result<T, E = QualityError> = std::result::Result<T, E>;
