use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod io;
mod profile;
mod report;
mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::new(config)?;

    commands::run(cli.command, &state).await
}

/// Logs go to stderr, stdout is reserved for command output
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}
