use std::path::{Path, PathBuf};

use crate::io::save_file;
use crate::report::word_lines;
use crate::state::AppState;

pub const WORD_LISTING_FILE: &str = "word_cache.txt";

/// Write the word cache listing, returns where it went
pub fn handle_dump_words(output: Option<&Path>, state: &AppState) -> anyhow::Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => state.config.report.output_dir.join(WORD_LISTING_FILE),
    };

    let cache = state.load_word_cache()?;
    save_file(&path, word_lines(cache.entries()).as_bytes())?;

    tracing::info!("Wrote {} words to {}", cache.len(), path.display());
    Ok(path)
}
