pub mod convert;
pub mod kanjiapi;
pub mod scrape;

pub use convert::ConvertClient;
pub use kanjiapi::KanjiApiClient;
pub use scrape::{parse_kana, parse_words, ScrapedWords};
