use crate::params::QualityParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AssessToolConfig {
    /// Directory scanned (non-recursively) for images.
    pub input_dir: PathBuf,
    #[serde(default)]
    pub params: QualityParams,
    pub output: AssessOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct AssessOutputConfig {
    pub report_json: PathBuf,
    /// Optional one-row-per-image CSV table.
    #[serde(default)]
    pub report_csv: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AssessToolConfig, String> {
    super::read_json(path)
}
