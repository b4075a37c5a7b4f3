use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use kanji_config::{Config, app_config_dir};

pub const CONFIG_FILE: &str = "config.json";

/// `<config dir>/kanji_lookup/config.json`
pub fn default_config_path() -> PathBuf {
    app_config_dir().join(CONFIG_FILE)
}

/// Load the config file given on the command line, else the one in the
/// user config dir, else defaults from the environment.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = default_config_path();
    if path.exists() {
        read_config(&path)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(Config::new())
    }
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn explicit_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "words": { "scan_delay_ms": 10 } }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.words.scan_delay_ms, 10);
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open config"));
    }

    #[test]
    fn invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }
}
