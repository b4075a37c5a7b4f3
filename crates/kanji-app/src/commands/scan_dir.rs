use std::path::{Path, PathBuf};

use kanji_provider::WordSource;
use tokio_util::sync::CancellationToken;

use crate::io::{list_files, read_text, save_file};
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    pub cancelled: bool,
}

/// Send each file in `dir` to the analyzer and store the page as
/// `<out_dir>/<file name>.html`.
///
/// Requests are spaced by the configured scan delay. A failing file is
/// logged and skipped.
pub async fn handle_scan_dir(
    dir: &Path,
    out_dir: &Path,
    state: &AppState,
    cancel: CancellationToken,
) -> anyhow::Result<ScanSummary> {
    let files = list_files(dir)?;
    let delay = state.config.words.scan_delay();
    let mut summary = ScanSummary::default();

    for (i, path) in files.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = cancel.cancelled() => {}
            }
        }
        if cancel.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        tracing::info!("File: {}", path.display());
        match scan_file(path, out_dir, state).await {
            Ok(saved) => summary.saved.push(saved),
            Err(e) => {
                tracing::warn!("Scan failed for {}: {:#}", path.display(), e);
                summary.failed.push((path.clone(), format!("{e:#}")));
            }
        }
    }

    tracing::info!(
        "Scanned {} of {} files into {}",
        summary.saved.len(),
        files.len(),
        out_dir.display()
    );
    if !summary.failed.is_empty() {
        tracing::warn!("{} files failed", summary.failed.len());
    }

    Ok(summary)
}

async fn scan_file(path: &Path, out_dir: &Path, state: &AppState) -> anyhow::Result<PathBuf> {
    let text = read_text(path)?;
    let markup = state.convert.fetch_words_for_text(&text).await?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output = out_dir.join(format!("{name}.html"));
    save_file(&output, markup.as_bytes())?;

    Ok(output)
}
