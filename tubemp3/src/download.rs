//! Run yt-dlp for a [`Plan`] and work out where the MP3s ended up.

use crate::config::{Mode, Plan, Settings};
use color_eyre::Section;
use eyre::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tubemp3_dl::dl::{DownloadOptions, OutputTemplates, download, extract, probe};

/// Folder name used when the playlist title cannot be looked up.
pub const FALLBACK_PLAYLIST_TITLE: &str = "playlist";

const TITLE_TEMPLATE: &str = "%(title)s";

/// Printed on stderr when yt-dlp skipped some playlist items.
pub const PARTIAL_FAILURE_WARNING: &str =
    "Some videos failed (removed, private, or network error).";

/// Where a successful run saved its output.
#[derive(Debug, PartialEq, Eq)]
pub enum Saved {
    /// Converted MP3 of a single video
    File(PathBuf),
    /// Playlist folder; `complete` is false when yt-dlp skipped failed items
    Folder { path: PathBuf, complete: bool },
}

impl Saved {
    /// Under `strict`, an incomplete playlist is an error.
    pub fn ensure_complete(&self, strict: bool) -> Result<()> {
        match self {
            Saved::Folder {
                complete: false, ..
            } if strict => bail!("some playlist items failed to download"),
            _ => Ok(()),
        }
    }
}

pub fn execute(plan: Plan, url: &str, settings: &Settings) -> Result<Saved> {
    match plan.mode {
        Mode::Music => download_track(url, plan),
        Mode::Playlist => download_playlist(url, plan, &settings.output_dir),
    }
}

pub fn download_playlist(url: &str, plan: Plan, output_dir: &Path) -> Result<Saved> {
    println!("Starting playlist download: {url}");
    tracing::info!(url, "downloading playlist");

    let retcode = download(&[url], plan.options, Some(plan.progress))
        .wrap_err("failed to download playlist")
        .with_suggestion(|| "check that the playlist is public and the URL is complete")?;

    if retcode != 0 {
        eprintln!("{PARTIAL_FAILURE_WARNING}");
        tracing::warn!(retcode, "playlist finished with failures");
    }

    let title = playlist_title(url);

    Ok(playlist_saved(output_dir, title.as_deref(), retcode))
}

pub fn download_track(url: &str, plan: Plan) -> Result<Saved> {
    println!("Starting download: {url}");
    tracing::info!(url, "downloading track");

    let (prepared, info) = extract(url, plan.options, Some(plan.progress))
        .wrap_err("failed to download track")?;

    tracing::debug!(
        prepared = %prepared.display(),
        title = ?info.title,
        duration = ?info.duration,
        "track downloaded"
    );

    Ok(Saved::File(mp3_path(&prepared)))
}

/// Best-effort lookup of a playlist's display title, as yt-dlp names its folder.
///
/// Only the playlist page is resolved, not its entries. The title goes
/// through yt-dlp's filename sanitizing, so it matches the folder that
/// `%(playlist_title)s` produced. Failures are logged and read as "no title".
pub fn playlist_title(url: &str) -> Option<String> {
    let opts = DownloadOptions {
        outtmpl: Some(OutputTemplates::simple(TITLE_TEMPLATE.to_string())),
        skip_download: Some(true),
        extract_flat: Some("in_playlist".to_string()),
        quiet: Some(true),
        no_warnings: Some(true),
        ..Default::default()
    };

    match probe(url, opts) {
        Ok(Some((folder, info))) => {
            tracing::debug!(
                title = ?info.title,
                folder = %folder.display(),
                entries = ?info.playlist_count,
                "playlist metadata"
            );
            info.title
                .filter(|title| !title.trim().is_empty())
                .map(|_| folder.to_string_lossy().into_owned())
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to look up playlist title");
            None
        }
    }
}

/// Result of a playlist run whose download returned `retcode`.
pub fn playlist_saved(output_dir: &Path, title: Option<&str>, retcode: i32) -> Saved {
    Saved::Folder {
        path: playlist_dir(output_dir, title),
        complete: retcode == 0,
    }
}

/// Folder yt-dlp filled for a playlist titled `title`.
pub fn playlist_dir(output_dir: &Path, title: Option<&str>) -> PathBuf {
    output_dir.join(title.unwrap_or(FALLBACK_PLAYLIST_TITLE))
}

/// File left by the MP3 conversion of `prepared`, the pre-conversion filename.
pub fn mp3_path(prepared: &Path) -> PathBuf {
    prepared.with_extension("mp3")
}
