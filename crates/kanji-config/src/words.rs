use std::env;
use std::path::PathBuf;
use std::time::Duration;

use kanji_types::MergeRule;
use serde::{Deserialize, Serialize};

fn default_scan_delay_ms() -> u64 {
    2000
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Pause between analyzer requests when scanning a directory
    pub scan_delay_ms: u64,
    /// Where `scan-dir` stores the analyzer pages
    pub results_dir: PathBuf,
    pub merge_rule: MergeRule,
}

impl WordsConfig {
    pub fn new() -> Self {
        let scan_delay_ms = env::var("SCAN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_scan_delay_ms);

        let merge_rule = match env::var("WORD_MERGE_RULE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("WORD_MERGE_RULE: {}, using {:?}", e, MergeRule::default());
                MergeRule::default()
            }),
            Err(_) => MergeRule::default(),
        };

        Self {
            scan_delay_ms,
            results_dir: default_results_dir(),
            merge_rule,
        }
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self::new()
    }
}
