//! CLI argument definitions using clap.

use crate::config::{Mode, Plan, Settings, default_output_dir};
use crate::download::{self, Saved};
use crate::ffmpeg;
use crate::prompt::{Prompt, require_url};
use clap::Parser;
use color_eyre::Section;
use eyre::{Context, Result};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "tubemp3")]
#[command(about = "Download the audio of a YouTube video or playlist as MP3")]
#[command(version)]
pub struct Cli {
    /// Video or playlist URL (asked for when omitted)
    pub url: Option<String>,

    /// Base output directory (default: `mp3` folder beside the executable)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to ffmpeg/ffprobe, either the executable or its folder
    #[arg(long)]
    pub ffmpeg_location: Option<PathBuf>,

    /// Download mode (asked for when omitted)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Fail when some playlist items could not be downloaded
    #[arg(long)]
    pub strict: bool,
}

/// Log filter from `RUST_LOG`-style `directives`, showing warnings when empty.
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    let (mode, url) = {
        let mut prompt = Prompt::new(io::stdin().lock(), io::stdout().lock());

        let mode = match cli.mode {
            Some(mode) => mode,
            None => prompt.mode()?,
        };

        let url = match cli.url.as_deref().map(require_url) {
            Some(Ok(url)) => url,
            _ => prompt.url(mode)?,
        };

        (mode, url)
    };

    let output_dir = match cli.output {
        Some(output) => output,
        None => default_output_dir()?,
    };
    std::fs::create_dir_all(&output_dir)
        .wrap_err_with(|| format!("failed to create {:?}", output_dir.display()))?;
    let output_dir = output_dir
        .canonicalize()
        .wrap_err_with(|| format!("failed to resolve {:?}", output_dir.display()))?;

    let ffmpeg_dir = ffmpeg::locate(cli.ffmpeg_location.as_deref())
        .wrap_err("ffmpeg is required to convert downloads to MP3")
        .suggestion(
            "install ffmpeg or pass its location with --ffmpeg-location \
             (e.g. C:\\ffmpeg\\bin or /usr/bin)",
        )?;

    tracing::debug!(
        ?mode,
        output_dir = %output_dir.display(),
        ffmpeg_dir = %ffmpeg_dir.display(),
        "resolved settings"
    );

    let settings = Settings {
        output_dir,
        ffmpeg_dir,
    };
    let plan = Plan::build(mode, &settings);

    let saved = download::execute(plan, &url, &settings)?;
    match &saved {
        Saved::File(path) => println!("File saved to: {}", path.display()),
        Saved::Folder { path, .. } => println!("Files saved to: {}", path.display()),
    }

    saved.ensure_complete(cli.strict)
}
