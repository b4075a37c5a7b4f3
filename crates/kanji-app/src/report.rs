use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use kanji_core::{Bucket, FrequencyTable};
use kanji_types::WordInfo;

use crate::io::save_file;

pub const VALUES_FILE: &str = "values.txt";
pub const UNCOMMON_FILE: &str = "uncommon.txt";
pub const COMMON_FILE: &str = "common.txt";
/// Kanji seen at least 50 times. The name predates the bucket split.
pub const FINAL_FILE: &str = "counts.txt";

/// Ranked kanji counts split into frequency buckets
#[derive(Debug, Default)]
pub struct FrequencyReport {
    /// `<kanji>: <count>` lines, most frequent first
    pub values: String,
    pub uncommon: String,
    pub common: String,
    pub final_bucket: String,
}

impl FrequencyReport {
    pub fn from_table(table: &FrequencyTable) -> Self {
        let mut report = Self::default();

        for (kanji, count) in table.ranked() {
            report.values.push_str(&format!("{kanji}: {count}\n"));

            match Bucket::for_count(count) {
                Bucket::Uncommon => report.uncommon.push(kanji),
                Bucket::Common => report.common.push(kanji),
                Bucket::Final => report.final_bucket.push(kanji),
            }
        }

        report
    }

    pub fn bucket(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Uncommon => &self.uncommon,
            Bucket::Common => &self.common,
            Bucket::Final => &self.final_bucket,
        }
    }

    /// Write the four report files into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let outputs = [
            (FINAL_FILE, self.bucket(Bucket::Final)),
            (UNCOMMON_FILE, self.bucket(Bucket::Uncommon)),
            (COMMON_FILE, self.bucket(Bucket::Common)),
            (VALUES_FILE, self.values.as_str()),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (name, contents) in outputs {
            let path = dir.join(name);
            save_file(&path, contents.as_bytes())?;
            written.push(path);
        }

        Ok(written)
    }
}

/// `key:kana | type | meaning | count` per word
pub fn word_lines(words: &BTreeMap<String, WordInfo>) -> String {
    words
        .iter()
        .map(|(key, word)| format!("{}:{}\n", key, word.listing_value()))
        .collect()
}
