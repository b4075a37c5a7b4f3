use anyhow::Context;
use kanji_config::Config;
use kanji_core::{KanjiCache, WordCache};
use kanji_lang_japanese::{ConvertClient, KanjiApiClient};
use kanji_provider::{KanjiSource, ProviderMetadata, WordSource};

/// Everything a command needs, built once at startup
pub struct AppState {
    pub config: Config,
    pub kanji_api: KanjiApiClient,
    pub convert: ConvertClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let kanji_api =
            KanjiApiClient::new(&config.provider).context("Failed to build kanji API client")?;
        let convert =
            ConvertClient::new(&config.provider).context("Failed to build convert client")?;

        log_provider(&kanji_api.metadata(), true);
        log_provider(&convert.metadata(), !config.provider.convert_token.is_empty());
        tracing::debug!("Cache dir: {}", config.cache.cache_dir().display());

        Ok(Self {
            config,
            kanji_api,
            convert,
        })
    }

    pub fn load_kanji_cache(&self) -> anyhow::Result<KanjiCache> {
        let path = self.config.cache.kanji_cache_path();
        tracing::info!("Kanji cache: {}", path.display());
        KanjiCache::load(&path).with_context(|| format!("Failed to load {}", path.display()))
    }

    pub fn load_word_cache(&self) -> anyhow::Result<WordCache> {
        let path = self.config.cache.word_cache_path();
        tracing::info!("Word cache: {}", path.display());
        WordCache::load(&path, self.config.words.merge_rule)
            .with_context(|| format!("Failed to load {}", path.display()))
    }
}

fn log_provider(metadata: &ProviderMetadata, has_token: bool) {
    tracing::debug!("Provider {}: {}", metadata.name, metadata.endpoint);
    if metadata.requires_token && !has_token {
        tracing::warn!("{} needs a token, requests will fail until one is set", metadata.name);
    }
}
