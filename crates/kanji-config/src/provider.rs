use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_kanji_api_url() -> String {
    "https://kanjiapi.dev/v1/kanji".to_string()
}

fn default_convert_url() -> String {
    "https://nihongodera.com/tools/convert".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Remote metadata sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the kanji API, the character is appended as a path segment
    pub kanji_api_url: String,
    /// Form endpoint used for word analysis and kana conversion
    pub convert_url: String,
    /// Access token sent as `_token` with every convert request
    pub convert_token: String,
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    pub fn new() -> Self {
        let kanji_api_url = env::var("KANJI_API_URL").unwrap_or_else(|_| default_kanji_api_url());
        let convert_url = env::var("CONVERT_URL").unwrap_or_else(|_| default_convert_url());
        let convert_token = env::var("CONVERT_TOKEN").unwrap_or_default();
        let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            kanji_api_url,
            convert_url,
            convert_token,
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new()
    }
}
