//! Failures detected before anything is handed to yt-dlp.

use thiserror::Error;

/// Input and environment errors, all fatal.
#[derive(Debug, Error)]
pub enum Error {
    /// Mode answer did not start with `m` or `p`
    #[error("invalid option {0:?}: type 'm' for music or 'p' for playlist")]
    InvalidMode(String),

    /// URL argument and prompt were both blank
    #[error("no URL provided")]
    MissingUrl,

    /// ffmpeg neither supplied nor found on `PATH`
    #[error("ffmpeg not found")]
    TranscoderNotFound,

    /// Reading a prompt answer failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for input and locator operations.
pub type Result<T> = std::result::Result<T, Error>;
