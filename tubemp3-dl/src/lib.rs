//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`mp3`] - MP3 preset (best audio, 192 kbps, embedded metadata and thumbnail)
//!
//! ## Quick Start
//!
//! **MP3 preset**:
//! ```no_run
//! use tubemp3_dl::{dl::extract, mp3::Mp3Preset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (file, info) = extract("https://youtube.com/watch?v=example", Mp3Preset::default().into(), None)?;
//! println!("{} -> {}", info.title.unwrap_or_default(), file.display());
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use tubemp3_dl::dl::{download, DownloadOptions, OutputPaths, OutputTemplates, PostProcessor};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio".to_string()),
//!     paths: Some(OutputPaths::default().with_home(Path::new("music"))),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     postprocessors: Some(vec![PostProcessor::extract_audio("mp3", "192")]),
//!     quiet: Some(true),
//!     ..Default::default()
//! };
//!
//! let retcode = download(&["https://youtube.com/watch?v=example"], opts, None)?;
//! assert_eq!(retcode, 0);
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod mp3;
