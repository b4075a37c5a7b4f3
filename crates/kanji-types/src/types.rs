use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Metadata for a single kanji as served by the kanji API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KanjiInfo {
    pub kanji: String,
    #[serde(default)]
    pub grade: Option<u32>,
    #[serde(default)]
    pub stroke_count: u32,
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default)]
    pub kun_readings: Vec<String>,
    #[serde(default)]
    pub on_readings: Vec<String>,
    #[serde(default)]
    pub name_readings: Vec<String>,
    #[serde(default)]
    pub jlpt: Option<u32>,
    #[serde(default)]
    pub unicode: String,
    #[serde(default, rename = "heisig_en")]
    pub english: Option<String>,
}

impl KanjiInfo {
    /// The kanji as a single character, if the record holds exactly one
    pub fn character(&self) -> Option<char> {
        let mut chars = self.kanji.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// One-line summary: `日 - on(ニチ, ジツ) - kun(ひ, -び): day; sun`
    pub fn summary(&self) -> String {
        format!(
            "{} - on({}) - kun({}): {}",
            self.kanji,
            self.on_readings.join(", "),
            self.kun_readings.join(", "),
            self.meanings.join("; ")
        )
    }
}

/// A vocabulary word scraped from the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordInfo {
    /// Surface form, used as the cache key
    pub kanji: String,
    #[serde(default)]
    pub kana: String,
    #[serde(default, rename = "type")]
    pub word_type: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub count: u32,
}

impl WordInfo {
    pub fn new(kanji: &str, kana: &str, word_type: &str, meaning: &str) -> Self {
        Self {
            kanji: kanji.to_string(),
            kana: kana.to_string(),
            word_type: word_type.to_string(),
            meaning: meaning.to_string(),
            count: 1,
        }
    }

    /// Value half of a `key:value` listing line
    pub fn listing_value(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.kana, self.word_type, self.meaning, self.count
        )
    }
}

/// How the stored count of a known word grows when it is sighted again.
///
/// `DoubleIncrement` reproduces the historical arithmetic (stored count is
/// bumped once for the existing entry and once more for the new sighting).
/// `SingleIncrement` adds one per sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeRule {
    DoubleIncrement,
    SingleIncrement,
}

pub const DEFAULT_MERGE_RULE: MergeRule = MergeRule::DoubleIncrement;

impl FromStr for MergeRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "double" | "double_increment" => Ok(MergeRule::DoubleIncrement),
            "single" | "single_increment" => Ok(MergeRule::SingleIncrement),
            other => Err(format!("unknown merge rule: {other:?}")),
        }
    }
}

impl MergeRule {
    pub fn increment(&self) -> u32 {
        match self {
            MergeRule::DoubleIncrement => 2,
            MergeRule::SingleIncrement => 1,
        }
    }
}

impl Default for MergeRule {
    fn default() -> Self {
        DEFAULT_MERGE_RULE
    }
}
