//! tubemp3 CLI - YouTube to MP3 downloader

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;
use tubemp3::cli::{Cli, log_filter, run_cli};

fn main() -> Result<()> {
    color_eyre::install()?;

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .init();

    run_cli(Cli::parse())
}
