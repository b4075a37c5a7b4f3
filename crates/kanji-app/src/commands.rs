use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::cli::Command;
use crate::io;
use crate::state::AppState;

pub mod count;
pub mod dump_words;
pub mod kana;
pub mod lookup;
pub mod scan_dir;
pub mod scrape_dir;
pub mod words;

use count::handle_count;
use dump_words::handle_dump_words;
use kana::handle_kana;
use lookup::handle_lookup;
use scan_dir::handle_scan_dir;
use scrape_dir::handle_scrape_dir;
use words::handle_words;

/// Run one CLI command to completion
pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    match command {
        Command::Count { script_dir } => {
            let output_dir = &state.config.report.output_dir;
            handle_count(&script_dir, output_dir)?;
        }
        Command::Lookup { file, text } => {
            let text = match file {
                Some(path) => io::read_text(&path)?,
                None => text.join(" "),
            };

            let report = handle_lookup(&text, state).await?;
            for info in &report.found {
                println!("{}", info.summary());
            }
        }
        Command::Words { file } => {
            let outcome = handle_words(&file, state).await?;
            tracing::info!(
                "{} words scraped, {} in cache, page saved to {}",
                outcome.scraped.words.len(),
                outcome.cache_size,
                outcome.scan_path.display()
            );
            println!("{}", outcome.words_path.display());
        }
        Command::ScanDir { dir, out } => {
            let out = out.unwrap_or_else(|| state.config.words.results_dir.clone());
            let summary = handle_scan_dir(&dir, &out, state, ctrl_c_token()).await?;
            for path in &summary.saved {
                println!("{}", path.display());
            }
            if summary.cancelled {
                tracing::info!("Scan cancelled");
            }
        }
        Command::ScrapeDir { dir, merge } => {
            let output_dir = &state.config.report.output_dir;
            let summary = handle_scrape_dir(&dir, output_dir, merge, state)?;
            tracing::debug!("Parsed {} pages", summary.pages);
            if !summary.words.unmatched.is_empty() {
                tracing::warn!(
                    "{} annotations had an unexpected shape",
                    summary.words.unmatched.len()
                );
            }
            println!("{}", summary.unique_path.display());
        }
        Command::Kana { text } => {
            let kana = handle_kana(&text.join(" "), state).await?;
            println!("{kana}");
        }
        Command::DumpWords { output } => {
            let path = handle_dump_words(output.as_deref(), state)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Token cancelled on the first Ctrl+C
fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested, finishing current file");
            child.cancel();
        }
    });

    token
}
