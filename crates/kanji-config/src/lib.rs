use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::provider::ProviderConfig;
use self::report::ReportConfig;
use self::words::WordsConfig;

pub mod cache;
pub mod provider;
pub mod report;
pub mod words;

pub use cache::{app_config_dir, user_config_dir};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub cache: CacheConfig,
    pub report: ReportConfig,
    pub words: WordsConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            provider: ProviderConfig::new(),
            cache: CacheConfig::new(),
            report: ReportConfig::new(),
            words: WordsConfig::new(),
        }
    }
}
