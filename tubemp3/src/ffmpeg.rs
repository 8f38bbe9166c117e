//! Locate the directory yt-dlp should load ffmpeg and ffprobe from.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// ffmpeg executable name on this platform.
#[cfg(windows)]
pub const FFMPEG_BIN: &str = "ffmpeg.exe";
#[cfg(not(windows))]
pub const FFMPEG_BIN: &str = "ffmpeg";

/// Resolve the ffmpeg directory from `hint`, falling back to `PATH`.
pub fn locate(hint: Option<&Path>) -> Result<PathBuf> {
    locate_with(hint, || which::which("ffmpeg").ok())
}

/// [`locate`] with the `PATH` lookup supplied by the caller.
///
/// - file hint: its directory, symlinks left unresolved
/// - directory hint: the directory itself
/// - no hint, or a hint that does not exist: directory of `search()`'s result
pub fn locate_with(
    hint: Option<&Path>,
    search: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(hint) = hint {
        if hint.is_file() {
            let file = std::path::absolute(hint)?;
            if let Some(dir) = file.parent() {
                tracing::debug!(dir = %dir.display(), "using ffmpeg from file hint");
                return Ok(dir.to_path_buf());
            }
        } else if hint.is_dir() {
            if !hint.join(FFMPEG_BIN).is_file() {
                tracing::warn!(dir = %hint.display(), "no {FFMPEG_BIN} in ffmpeg location");
            }
            return Ok(hint.to_path_buf());
        } else {
            tracing::warn!(
                path = %hint.display(),
                "ffmpeg location does not exist, searching PATH"
            );
        }
    }

    let found = search().ok_or(Error::TranscoderNotFound)?;
    let dir = found.parent().ok_or(Error::TranscoderNotFound)?;

    tracing::debug!(dir = %dir.display(), "using ffmpeg from PATH");

    Ok(dir.to_path_buf())
}
