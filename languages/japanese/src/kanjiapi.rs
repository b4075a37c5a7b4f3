use async_trait::async_trait;
use kanji_config::provider::ProviderConfig;
use kanji_provider::{KanjiSource, ProviderError, ProviderMetadata};
use kanji_types::KanjiInfo;
use reqwest::StatusCode;

/// Client for the kanjiapi.dev REST API
#[derive(Clone)]
pub struct KanjiApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl KanjiApiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self::with_client(client, &config.kanji_api_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, kanji: char) -> String {
        format!("{}/{}", self.base_url, kanji)
    }
}

#[async_trait]
impl KanjiSource for KanjiApiClient {
    async fn fetch_kanji(&self, kanji: char) -> Result<KanjiInfo, ProviderError> {
        let url = self.endpoint(kanji);
        tracing::debug!("Querying: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(kanji.to_string()));
        }

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<KanjiInfo>(&body)
            .map_err(|e| ProviderError::Malformed(format!("kanji {}: {}", kanji, e)))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "kanjiapi.dev".to_string(),
            endpoint: self.base_url.clone(),
            requires_token: false,
        }
    }
}
