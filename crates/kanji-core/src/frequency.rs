use std::collections::{BTreeSet, HashMap};

use crate::script::is_kanji;

/// Highest count that still lands in the uncommon bucket
pub const UNCOMMON_MAX: usize = 10;
/// Lowest count that lands in the final bucket
pub const FINAL_MIN: usize = 50;

/// Kanji occurrence counts for one piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every kanji in `text`, ignoring all other characters
    pub fn add_text(&mut self, text: &str) {
        for c in text.chars().filter(|c| is_kanji(*c)) {
            *self.counts.entry(c).or_insert(0) += 1;
        }
    }

    pub fn get(&self, kanji: char) -> Option<usize> {
        self.counts.get(&kanji).copied()
    }

    /// Number of distinct kanji
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of kanji occurrences
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Entries by descending count. Ties are ordered by code point so that
    /// reports are reproducible, callers should not depend on it.
    pub fn ranked(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Count kanji occurrences in `text`
pub fn count(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    table.add_text(text);
    table
}

/// Distinct kanji of `text` in code point order
pub fn unique_kanji(text: &str) -> BTreeSet<char> {
    text.chars().filter(|c| is_kanji(*c)).collect()
}

/// Report bucket for a kanji based on how often it occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    Uncommon,
    Common,
    Final,
}

impl Bucket {
    pub fn for_count(count: usize) -> Self {
        match count {
            c if c <= UNCOMMON_MAX => Bucket::Uncommon,
            c if c < FINAL_MIN => Bucket::Common,
            _ => Bucket::Final,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Uncommon => "uncommon",
            Bucket::Common => "common",
            Bucket::Final => "final",
        }
    }
}
