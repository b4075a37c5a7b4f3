pub mod error;
pub mod frequency;
pub mod kanji_cache;
pub mod preprocess;
pub mod script;
pub mod store;
pub mod word_cache;

pub use error::{CacheError, LookupError};
pub use frequency::{count, unique_kanji, Bucket, FrequencyTable};
pub use kanji_cache::{KanjiCache, LookupFailure, LookupReport};
pub use script::{classify, is_kana, is_kanji, Script};
pub use store::JsonStore;
pub use word_cache::WordCache;
