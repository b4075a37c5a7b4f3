use async_trait::async_trait;
use kanji_config::provider::ProviderConfig;
use kanji_core::script::is_latin1;
use kanji_provider::{ProviderError, ProviderMetadata, WordSource};

use crate::scrape::parse_kana;

/// Client for the nihongodera `/tools/convert` form endpoint
#[derive(Clone)]
pub struct ConvertClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ConvertClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self::with_client(
            client,
            &config.convert_url,
            &config.convert_token,
        ))
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str, token: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        }
    }

    async fn submit(&self, params: &[(&str, &str)]) -> Result<String, ProviderError> {
        if self.token.is_empty() {
            return Err(ProviderError::Config(
                "convert token is not set (CONVERT_TOKEN)".to_string(),
            ));
        }

        tracing::info!("Querying: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Convert status: {}", status);

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Drop Latin-1 characters so only Japanese text is sent for conversion
pub fn strip_latin(text: &str) -> String {
    text.chars().filter(|c| !is_latin1(*c)).collect()
}

#[async_trait]
impl WordSource for ConvertClient {
    async fn fetch_words_for_text(&self, text: &str) -> Result<String, ProviderError> {
        let params = [
            ("options[analyzer][]", "analyzer"),
            ("options[analyzer][words]", "words"),
            ("_token", self.token.as_str()),
            ("text", text),
            ("type", "analyzer"),
        ];

        self.submit(&params).await
    }

    async fn fetch_kana_reading(&self, text: &str) -> Result<String, ProviderError> {
        let text = strip_latin(text);
        if text.is_empty() {
            return Ok(String::new());
        }

        let params = [
            ("options[kana][style]", "hiragana"),
            ("options[kana][space][type]", "space"),
            ("_token", self.token.as_str()),
            ("text", text.as_str()),
            ("type", "kana"),
        ];

        let markup = self.submit(&params).await?;
        Ok(parse_kana(&markup))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "nihongodera".to_string(),
            endpoint: self.endpoint.clone(),
            requires_token: true,
        }
    }
}
