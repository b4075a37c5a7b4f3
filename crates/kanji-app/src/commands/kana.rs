use anyhow::Context;
use kanji_provider::WordSource;

use crate::state::AppState;

pub async fn handle_kana(text: &str, state: &AppState) -> anyhow::Result<String> {
    tracing::info!("Kana lookup: {}", text);

    state
        .convert
        .fetch_kana_reading(text)
        .await
        .context("Kana conversion failed")
}
