use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::CacheError;

/// A string-keyed record map backed by a single JSON file.
///
/// The whole map is read on load and written back in full on persist.
#[derive(Debug, Clone)]
pub struct JsonStore<V> {
    path: PathBuf,
    entries: BTreeMap<String, V>,
}

impl<V> JsonStore<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Empty store that will persist to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. So does a file that is not a
    /// JSON object of records, after logging a warning. Any other IO error
    /// is returned.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No cache found: {}", path.display());
                return Ok(Self::empty(path));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<BTreeMap<String, V>>(&data) {
            Ok(entries) => {
                tracing::debug!("Loaded {} entries from {}", entries.len(), path.display());
                Ok(Self { path, entries })
            }
            Err(e) => {
                tracing::warn!(
                    "Cache file corrupted, starting empty: {} ({})",
                    path.display(),
                    e
                );
                Ok(Self::empty(path))
            }
        }
    }

    /// Write every entry to the backing file.
    ///
    /// Data goes to a temporary file next to the target which then replaces
    /// it, so a failed write leaves the previous cache intact.
    pub fn persist(&self) -> Result<(), CacheError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer(&mut writer, &self.entries)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        tracing::debug!("Saved {} entries to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl<V> JsonStore<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Insert or replace a record, returning the previous one
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, V> {
        &self.entries
    }
}
