use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use kanji_lang_japanese::{ScrapedWords, parse_words};
use kanji_provider::WordSource;

use crate::io::{output_paths, read_text, save_file};
use crate::state::AppState;

#[derive(Debug)]
pub struct WordsOutcome {
    pub scraped: ScrapedWords,
    /// Raw analyzer page
    pub scan_path: PathBuf,
    /// `surface:annotation` listing
    pub words_path: PathBuf,
    pub cache_size: usize,
}

/// Analyze a file, keep the page and word listing next to it, and merge the
/// words into the word cache
pub async fn handle_words(file: &Path, state: &AppState) -> anyhow::Result<WordsOutcome> {
    if !file.is_file() {
        bail!("File does not exist, aborting: {}", file.display());
    }

    let (dir, stem) = output_paths(file)?;
    tracing::info!("Word lookup: {}", file.display());

    let text = read_text(file)?;
    let markup = state
        .convert
        .fetch_words_for_text(&text)
        .await
        .with_context(|| format!("Word analysis failed for {}", file.display()))?;

    let scan_path = dir.join(format!("{stem}_scan.html"));
    save_file(&scan_path, markup.as_bytes())?;

    let scraped = parse_words(&markup);
    let words_path = dir.join(format!("{stem}_words.txt"));
    save_file(&words_path, scraped.listing_text().as_bytes())?;

    let mut cache = state.load_word_cache()?;
    tracing::debug!("Merging with {:?}", cache.rule());
    let cache_size = cache
        .merge(scraped.words.clone())
        .context("Failed to save word cache")?
        .len();

    Ok(WordsOutcome {
        scraped,
        scan_path,
        words_path,
        cache_size,
    })
}
