use anyhow::Context;
use kanji_core::preprocess::{DefaultPreprocessor, Preprocessor};
use kanji_core::{LookupError, LookupReport, unique_kanji};

use crate::state::AppState;

/// Resolve every distinct kanji in `text` through the kanji cache
pub async fn handle_lookup(text: &str, state: &AppState) -> anyhow::Result<LookupReport> {
    let text = DefaultPreprocessor.process(text);
    tracing::info!("Kanji lookup: {}", text);

    let keys = unique_kanji(&text);
    if keys.is_empty() {
        tracing::info!("No kanji in input");
        return Ok(LookupReport::default());
    }

    let mut cache = state.load_kanji_cache()?;
    let report = cache.lookup_all(keys, &state.kanji_api).await;

    if cache.is_dirty() {
        cache.persist().context("Failed to save kanji cache")?;
    }

    tracing::info!(
        "Resolved {} kanji ({} fetched)",
        report.found.len(),
        report.fetched
    );
    summarize_failures(&report);

    Ok(report)
}

fn summarize_failures(report: &LookupReport) {
    if report.failures.is_empty() {
        return;
    }

    let failed: String = report.failures.iter().map(|f| f.kanji).collect();
    let transient = report
        .failures
        .iter()
        .filter(|f| matches!(&f.error, LookupError::Provider(e) if e.is_transient()))
        .count();

    tracing::warn!(
        "{} kanji failed: {} ({} may succeed on retry)",
        report.failures.len(),
        failed,
        transient
    );
}
