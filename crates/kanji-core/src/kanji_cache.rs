use std::collections::BTreeSet;
use std::path::PathBuf;

use kanji_provider::KanjiSource;
use kanji_types::KanjiInfo;

use crate::error::{CacheError, LookupError};
use crate::script::is_kanji;
use crate::store::JsonStore;

/// Kanji metadata cache in front of a [`KanjiSource`]
pub struct KanjiCache {
    store: JsonStore<KanjiInfo>,
    dirty: bool,
}

/// A single kanji that could not be resolved
#[derive(Debug)]
pub struct LookupFailure {
    pub kanji: char,
    pub error: LookupError,
}

/// Outcome of a batch lookup
#[derive(Debug, Default)]
pub struct LookupReport {
    /// Resolved records in lookup order
    pub found: Vec<KanjiInfo>,
    pub failures: Vec<LookupFailure>,
    /// How many records came from the remote source
    pub fetched: usize,
}

impl KanjiCache {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self {
            store: JsonStore::load(path)?,
            dirty: false,
        })
    }

    pub fn get(&self, kanji: char) -> Option<&KanjiInfo> {
        self.store.get(kanji.encode_utf8(&mut [0; 4]))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether records were added since load or the last persist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the cached record, fetching it on a miss.
    ///
    /// A fetched record is only stored when it describes the requested kanji.
    pub async fn lookup(
        &mut self,
        kanji: char,
        source: &dyn KanjiSource,
    ) -> Result<KanjiInfo, LookupError> {
        if let Some(info) = self.get(kanji) {
            return Ok(info.clone());
        }

        if !is_kanji(kanji) {
            return Err(LookupError::NotKanji(kanji));
        }

        tracing::debug!("Cache miss for {}, fetching", kanji);
        let info = source.fetch_kanji(kanji).await?;

        if info.character() != Some(kanji) {
            return Err(LookupError::Mismatch {
                requested: kanji,
                received: info.kanji,
            });
        }

        self.store.insert(kanji.to_string(), info.clone());
        self.dirty = true;
        Ok(info)
    }

    /// Look up every distinct kanji in `keys`.
    ///
    /// Duplicates are collapsed before any fetch. A failing kanji is recorded
    /// in the report and the batch carries on.
    pub async fn lookup_all(
        &mut self,
        keys: impl IntoIterator<Item = char>,
        source: &dyn KanjiSource,
    ) -> LookupReport {
        let mut seen = BTreeSet::new();
        let mut report = LookupReport::default();

        for kanji in keys {
            if !seen.insert(kanji) {
                continue;
            }

            let cached = self.get(kanji).is_some();
            match self.lookup(kanji, source).await {
                Ok(info) => {
                    if !cached {
                        report.fetched += 1;
                    }
                    report.found.push(info);
                }
                Err(error) => {
                    tracing::warn!("Lookup failed for {}: {}", kanji, error);
                    report.failures.push(LookupFailure { kanji, error });
                }
            }
        }

        report
    }

    /// Write the cache back in full
    pub fn persist(&mut self) -> Result<(), CacheError> {
        self.store.persist()?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use kanji_provider::{ProviderError, ProviderMetadata};

    use super::*;

    /// Answers from a fixed table and records every request
    #[derive(Default)]
    struct FakeSource {
        records: HashMap<char, KanjiInfo>,
        calls: Mutex<Vec<char>>,
    }

    impl FakeSource {
        fn with(kanji: &[char]) -> Self {
            let records = kanji
                .iter()
                .map(|k| {
                    let info = KanjiInfo {
                        kanji: k.to_string(),
                        stroke_count: 4,
                        meanings: vec![format!("meaning of {k}")],
                        ..Default::default()
                    };
                    (*k, info)
                })
                .collect();
            Self {
                records,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<char> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl KanjiSource for FakeSource {
        async fn fetch_kanji(&self, kanji: char) -> Result<KanjiInfo, ProviderError> {
            self.calls.lock().unwrap().push(kanji);
            self.records
                .get(&kanji)
                .cloned()
                .ok_or_else(|| ProviderError::NotFound(kanji.to_string()))
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "fake".to_string(),
                endpoint: String::new(),
                requires_token: false,
            }
        }
    }

    fn empty_cache(dir: &tempfile::TempDir) -> KanjiCache {
        KanjiCache::load(dir.path().join("kanji_cache.json")).unwrap()
    }

    #[tokio::test]
    async fn one_fetch_per_distinct_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = empty_cache(&dir);
        let source = FakeSource::with(&['木', '水']);

        let report = cache.lookup_all("木木木水水".chars(), &source).await;

        assert_eq!(source.calls(), vec!['木', '水']);
        assert_eq!(report.found.len(), 2);
        assert_eq!(report.fetched, 2);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn hit_does_not_touch_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = empty_cache(&dir);
        let source = FakeSource::with(&['日']);

        let first = cache.lookup('日', &source).await.unwrap();
        let second = cache.lookup('日', &source).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn failures_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = empty_cache(&dir);
        let source = FakeSource::with(&['日', '語']);

        let report = cache.lookup_all("日本語".chars(), &source).await;

        assert_eq!(report.found.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kanji, '本');
        assert!(matches!(
            report.failures[0].error,
            LookupError::Provider(ProviderError::NotFound(_))
        ));
        assert!(cache.get('本').is_none());
    }

    #[tokio::test]
    async fn mismatched_record_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = empty_cache(&dir);
        let mut source = FakeSource::with(&[]);
        source.records.insert(
            '山',
            KanjiInfo {
                kanji: "川".to_string(),
                ..Default::default()
            },
        );

        let err = cache.lookup('山', &source).await.unwrap_err();
        assert!(matches!(err, LookupError::Mismatch { requested: '山', .. }));
        assert!(cache.is_empty());
        assert!(!cache.is_dirty());
    }

    #[tokio::test]
    async fn non_kanji_key_is_rejected_without_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = empty_cache(&dir);
        let source = FakeSource::with(&['日']);

        let err = cache.lookup('あ', &source).await.unwrap_err();
        assert!(matches!(err, LookupError::NotKanji('あ')));
        assert!(source.calls().is_empty());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn persisted_records_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource::with(&['日', '本']);

        let mut cache = empty_cache(&dir);
        cache.lookup_all("日本".chars(), &source).await;
        assert!(cache.is_dirty());
        cache.persist().unwrap();
        assert!(!cache.is_dirty());

        let mut reloaded = empty_cache(&dir);
        assert_eq!(reloaded.len(), 2);
        let report = reloaded.lookup_all("本日".chars(), &source).await;
        assert_eq!(report.fetched, 0);
        assert_eq!(source.calls().len(), 2);
    }
}
