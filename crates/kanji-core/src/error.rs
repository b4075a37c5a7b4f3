use kanji_provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to replace cache file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Not a kanji: {0}")]
    NotKanji(char),

    #[error("Requested {requested} but provider returned {received:?}")]
    Mismatch { requested: char, received: String },
}
