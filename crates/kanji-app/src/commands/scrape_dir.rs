use std::path::{Path, PathBuf};

use anyhow::Context;
use kanji_lang_japanese::{ScrapedWords, parse_words};

use crate::io::{list_files, output_paths, read_text, save_file};
use crate::report::word_lines;
use crate::state::AppState;

pub const UNIQUE_WORDS_FILE: &str = "unique_words.txt";

#[derive(Debug)]
pub struct ScrapeSummary {
    pub pages: usize,
    pub words: ScrapedWords,
    pub unique_path: PathBuf,
}

/// Parse every saved analyzer page in `dir`.
///
/// Each page gets a `<stem>_words.txt` listing next to it, the union of all
/// words goes to `unique_words.txt` in `output_dir`.
pub fn handle_scrape_dir(
    dir: &Path,
    output_dir: &Path,
    merge: bool,
    state: &AppState,
) -> anyhow::Result<ScrapeSummary> {
    let pages: Vec<PathBuf> = list_files(dir)?
        .into_iter()
        .filter(|p| is_html(p))
        .collect();

    let mut union = ScrapedWords::default();
    for page in &pages {
        let (page_dir, stem) = output_paths(page)?;
        let scraped = parse_words(&read_text(page)?);

        let listing_path = page_dir.join(format!("{stem}_words.txt"));
        tracing::info!("Words output: {}", listing_path.display());
        save_file(&listing_path, scraped.listing_text().as_bytes())?;

        union.extend(scraped);
    }

    let unique_path = output_dir.join(UNIQUE_WORDS_FILE);
    save_file(&unique_path, word_lines(&union.words).as_bytes())?;
    tracing::info!(
        "{} unique words from {} pages",
        union.words.len(),
        pages.len()
    );

    if merge {
        let mut cache = state.load_word_cache()?;
        cache
            .merge(union.words.clone())
            .context("Failed to save word cache")?;
    }

    Ok(ScrapeSummary {
        pages: pages.len(),
        words: union,
        unique_path,
    })
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}
