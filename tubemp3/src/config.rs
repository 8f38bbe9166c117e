//! Settings resolved at start-up and the yt-dlp plan built from them.
//!
//! Both modes share the MP3 preset; they differ only in where files land and
//! in whether a failing item aborts the run.

use crate::progress;
use eyre::{Context, OptionExt, Result};
use std::path::PathBuf;
use tubemp3_dl::dl::{DownloadOptions, OutputPaths, OutputTemplates, ProgressHook};
use tubemp3_dl::mp3::Mp3Preset;

/// Folder created beside the executable when `--output` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "mp3";

const TRACK_TEMPLATE: &str = "%(title)s.%(ext)s";
const PLAYLIST_TEMPLATE: &str = "%(playlist_title)s/%(title)s.%(ext)s";

/// What the URL points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// A single video, saved as one MP3
    Music,
    /// A playlist, saved into a folder named after it
    Playlist,
}

/// `mp3` folder beside the running executable.
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().wrap_err("failed to locate the running executable")?;

    exe.parent()
        .map(|dir| dir.join(DEFAULT_OUTPUT_DIR))
        .ok_or_eyre("executable path has no parent directory")
}

/// Values computed once per run and passed to whatever needs them.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Existing, canonical base output directory
    pub output_dir: PathBuf,
    /// Directory holding the ffmpeg binaries
    pub ffmpeg_dir: PathBuf,
}

/// yt-dlp configuration for one run, tagged with the mode it was built for.
#[derive(Clone, Debug)]
pub struct Plan {
    pub mode: Mode,
    pub options: DownloadOptions,
    pub progress: ProgressHook,
}

impl Plan {
    pub fn build(mode: Mode, settings: &Settings) -> Self {
        let mut options: DownloadOptions = Mp3Preset::default().into();

        options.paths = Some(OutputPaths::default().with_home(&settings.output_dir));
        options.ffmpeg_location = Some(settings.ffmpeg_dir.to_string_lossy().to_string());

        let template = match mode {
            Mode::Music => {
                options.ignoreerrors = Some(false);
                options.noplaylist = Some(true);
                TRACK_TEMPLATE
            }
            Mode::Playlist => {
                options.ignoreerrors = Some(true);
                PLAYLIST_TEMPLATE
            }
        };
        options.outtmpl = Some(OutputTemplates::simple(template.to_string()));

        tracing::debug!(?mode, ?options, "built download plan");

        Self {
            mode,
            options,
            progress: progress::report,
        }
    }
}
