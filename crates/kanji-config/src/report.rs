use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where report files are written
    pub output_dir: PathBuf,
}

impl ReportConfig {
    pub fn new() -> Self {
        let output_dir = env::var("REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_dir());

        Self { output_dir }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
