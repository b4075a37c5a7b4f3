use std::collections::BTreeMap;
use std::path::PathBuf;

use kanji_types::{MergeRule, WordInfo};

use crate::error::CacheError;
use crate::script::starts_with_kanji;
use crate::store::JsonStore;

/// Persistent vocabulary cache keyed by surface form
pub struct WordCache {
    store: JsonStore<WordInfo>,
    rule: MergeRule,
}

impl WordCache {
    pub fn load(path: impl Into<PathBuf>, rule: MergeRule) -> Result<Self, CacheError> {
        Ok(Self {
            store: JsonStore::load(path)?,
            rule,
        })
    }

    pub fn rule(&self) -> MergeRule {
        self.rule
    }

    pub fn get(&self, key: &str) -> Option<&WordInfo> {
        self.store.get(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, WordInfo> {
        self.store.entries()
    }

    /// Fold freshly scraped words into the cache and persist it.
    ///
    /// Unknown words are inserted as they are. A known word has its count
    /// raised by the merge rule's increment and takes the newest non-empty
    /// reading, type and meaning. Keys that do not start with a kanji are
    /// skipped.
    pub fn merge(
        &mut self,
        incoming: BTreeMap<String, WordInfo>,
    ) -> Result<&BTreeMap<String, WordInfo>, CacheError> {
        let (mut added, mut updated) = (0usize, 0usize);

        for (key, word) in incoming {
            if !starts_with_kanji(&key) {
                tracing::warn!("Skipping word without leading kanji: {}", key);
                continue;
            }

            match self.store.get_mut(&key) {
                Some(existing) => {
                    existing.count += self.rule.increment();
                    refresh(existing, word);
                    updated += 1;
                }
                None => {
                    self.store.insert(key, word);
                    added += 1;
                }
            }
        }

        tracing::info!(
            "Word cache: {} new, {} updated, {} total",
            added,
            updated,
            self.store.len()
        );

        self.store.persist()?;
        Ok(self.store.entries())
    }
}

fn refresh(existing: &mut WordInfo, newer: WordInfo) {
    if !newer.kana.is_empty() {
        existing.kana = newer.kana;
    }
    if !newer.word_type.is_empty() {
        existing.word_type = newer.word_type;
    }
    if !newer.meaning.is_empty() {
        existing.meaning = newer.meaning;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(words: &[WordInfo]) -> BTreeMap<String, WordInfo> {
        words.iter().map(|w| (w.kanji.clone(), w.clone())).collect()
    }

    #[test]
    fn new_words_are_inserted_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = WordCache::load(dir.path().join("words.json"), MergeRule::default()).unwrap();

        let merged = cache
            .merge(batch(&[WordInfo::new("場所", "ばしょ", "noun", "place")]))
            .unwrap();

        assert_eq!(merged["場所"].count, 1);
        assert_eq!(merged["場所"].kana, "ばしょ");
    }

    #[test]
    fn double_increment_adds_two_per_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let word = WordInfo::new("勉強", "べんきょう", "noun", "study");

        let mut cache = WordCache::load(&path, MergeRule::DoubleIncrement).unwrap();
        cache.merge(batch(&[word.clone()])).unwrap();
        cache.merge(batch(&[word.clone()])).unwrap();
        assert_eq!(cache.get("勉強").unwrap().count, 3);

        // persisted after every merge
        let reloaded = WordCache::load(&path, MergeRule::DoubleIncrement).unwrap();
        assert_eq!(reloaded.get("勉強").unwrap().count, 3);
    }

    #[test]
    fn single_increment_adds_one_per_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let word = WordInfo::new("勉強", "べんきょう", "noun", "study");

        let mut cache =
            WordCache::load(dir.path().join("words.json"), MergeRule::SingleIncrement).unwrap();
        cache.merge(batch(&[word.clone()])).unwrap();
        cache.merge(batch(&[word.clone()])).unwrap();
        cache.merge(batch(&[word])).unwrap();

        assert_eq!(cache.get("勉強").unwrap().count, 3);
    }

    #[test]
    fn repeat_refreshes_non_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = WordCache::load(dir.path().join("words.json"), MergeRule::default()).unwrap();

        cache
            .merge(batch(&[WordInfo::new("伝える", "つたえる", "verb", "to convey")]))
            .unwrap();
        cache
            .merge(batch(&[WordInfo::new("伝える", "", "verb", "to tell")]))
            .unwrap();

        let word = cache.get("伝える").unwrap();
        assert_eq!(word.kana, "つたえる");
        assert_eq!(word.meaning, "to tell");
    }

    #[test]
    fn rejects_keys_without_leading_kanji() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = WordCache::load(dir.path().join("words.json"), MergeRule::default()).unwrap();

        cache
            .merge(batch(&[
                WordInfo::new("たしかに", "たしかに", "adverb", "surely"),
                WordInfo::new("hello", "", "", ""),
            ]))
            .unwrap();

        assert!(cache.is_empty());
    }
}
