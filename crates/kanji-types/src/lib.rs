pub mod types;

pub use types::{KanjiInfo, MergeRule, WordInfo, DEFAULT_MERGE_RULE};
