use kanji_types::KanjiInfo;

/// Source of per-kanji metadata
#[async_trait::async_trait]
pub trait KanjiSource: Send + Sync {
    /// Fetch the record for a single kanji
    async fn fetch_kanji(&self, kanji: char) -> Result<KanjiInfo, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Source of word segmentation and kana readings.
///
/// Both calls return what the remote service returns; turning markup into
/// records is left to the parser that matches the service.
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Submit text for word analysis, returns the raw result markup
    async fn fetch_words_for_text(&self, text: &str) -> Result<String, ProviderError>;

    /// Convert text to its hiragana reading
    async fn fetch_kana_reading(&self, text: &str) -> Result<String, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
    pub requires_token: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid provider configuration: {0}")]
    Config(String),
}

impl ProviderError {
    /// Whether retrying the same request later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Network(e) => e.is_timeout() || e.is_connect(),
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
