use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Subdirectory of the user config dir owned by this tool
pub const APP_DIR_NAME: &str = "kanji_lookup";

fn default_kanji_file() -> String {
    "kanji_cache.json".to_string()
}

fn default_word_file() -> String {
    "word_cache.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Overrides `<user config dir>/kanji_lookup`
    pub dir: Option<PathBuf>,
    pub kanji_file: String,
    pub word_file: String,
}

impl CacheConfig {
    pub fn new() -> Self {
        Self {
            dir: env::var("KANJI_LOOKUP_CONFIG_DIR").ok().map(PathBuf::from),
            kanji_file: default_kanji_file(),
            word_file: default_word_file(),
        }
    }

    /// Directory holding both cache files
    pub fn cache_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => app_config_dir(),
        }
    }

    pub fn kanji_cache_path(&self) -> PathBuf {
        self.cache_dir().join(&self.kanji_file)
    }

    pub fn word_cache_path(&self) -> PathBuf {
        self.cache_dir().join(&self.word_file)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `<user config dir>/kanji_lookup`, or `KANJI_LOOKUP_CONFIG_DIR` when set
pub fn app_config_dir() -> PathBuf {
    if let Ok(dir) = env::var("KANJI_LOOKUP_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    user_config_dir().join(APP_DIR_NAME)
}

/// Platform user configuration directory, the working directory when the
/// platform has none
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| {
        tracing::warn!("No user config directory, using the working directory");
        PathBuf::from(".")
    })
}
