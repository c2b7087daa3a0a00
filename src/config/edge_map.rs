use crate::params::EdgeParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeMapToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub edges: EdgeParams,
    pub output: EdgeMapOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeMapOutputConfig {
    pub edge_image: PathBuf,
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeMapToolConfig, String> {
    super::read_json(path)
}
