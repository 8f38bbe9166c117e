//! Download YouTube audio as MP3 through yt-dlp and ffmpeg.
//!
//! The binary is a thin shell over [`cli::run_cli`]; the modules follow the
//! order a run goes through them:
//!
//! - [`prompt`] - mode and URL from stdin when not given as arguments
//! - [`ffmpeg`] - transcoder directory lookup
//! - [`config`] - yt-dlp options for the selected [`config::Mode`]
//! - [`download`] - yt-dlp invocation and final path resolution
//! - [`progress`] - terminal progress lines

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod ffmpeg;
pub mod progress;
pub mod prompt;
