//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters
//! and the three entry points this crate needs:
//!
//! - [`download`] - `YoutubeDL.download(urls)`, returns yt-dlp's return code
//! - [`extract`] - `extract_info(url, download=True)`, returns the prepared filename and info
//! - [`probe`] - `extract_info(url, download=False)`, metadata and the filename it would use
//!
//! ```no_run
//! use tubemp3_dl::{dl::extract, mp3::Mp3Preset};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (file, _info) = extract("https://youtube.com/watch?v=example", Mp3Preset::default().into(), None)?;
//! println!("Downloaded: {}", file.display());
//! # Ok(())
//! # }
//! ```

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Directory that relative output templates are resolved against.
    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`) plus its options.
///
/// Unset options are dropped before reaching yt-dlp, which forwards the
/// remaining entries to the post-processor as keyword arguments.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

impl PostProcessor {
    /// Post-processor without options.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    /// `FFmpegExtractAudio` converting to `codec` at `quality` (kbps for lossy codecs).
    pub fn extract_audio(codec: &str, quality: &str) -> Self {
        Self {
            key: "FFmpegExtractAudio".to_string(),
            preferredcodec: Some(codec.to_string()),
            preferredquality: Some(quality.to_string()),
        }
    }
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// Field names match yt-dlp parameter names; `None` means "use yt-dlp's default".
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    /// Keep going when an item of a playlist fails
    pub ignoreerrors: Option<bool>,
    pub retries: Option<u32>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub writethumbnail: Option<bool>,
    /// Download only the video when the URL also references a playlist
    pub noplaylist: Option<bool>,
    pub skip_download: Option<bool>,
    /// `"in_playlist"` resolves playlist entries lazily
    pub extract_flat: Option<String>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
    /// Directory holding the ffmpeg and ffprobe binaries
    pub ffmpeg_location: Option<String>,
}

/// Essential metadata from yt-dlp info dict.
///
/// Built from a fixed subset of the sanitized info dict, so every field is
/// present (possibly `None`). Works for single videos and playlists alike.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct DownloadInfo {
    /// Video or playlist identifier
    pub id: Option<String>,
    /// Video title, or the playlist title for playlists
    pub title: Option<String>,
    /// Extractor name (e.g., "Youtube", "YoutubeTab")
    pub extractor_key: Option<String>,
    /// Full name of the video uploader
    pub uploader: Option<String>,
    /// Length of the video in seconds
    pub duration: Option<f64>,
    /// URL to the video webpage
    pub webpage_url: Option<String>,
    /// Number of entries, playlists only
    pub playlist_count: Option<i64>,
}

/// State reported by a yt-dlp progress hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressStatus {
    Downloading,
    /// Raw download done; post-processing follows
    Finished,
    Other(String),
}

impl From<String> for ProgressStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "downloading" => Self::Downloading,
            "finished" => Self::Finished,
            _ => Self::Other(status),
        }
    }
}

/// One progress hook call, reduced to what is worth displaying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressEvent {
    pub status: ProgressStatus,
    /// Percent complete as formatted by yt-dlp, e.g. `"42.0%"`
    pub percent: String,
    pub title: String,
}

#[derive(FromPyObject)]
#[pyo3(from_item_all)]
struct RawProgress {
    status: String,
    percent: String,
    title: String,
}

impl From<RawProgress> for ProgressEvent {
    fn from(raw: RawProgress) -> Self {
        Self {
            status: raw.status.into(),
            percent: raw.percent,
            title: raw.title,
        }
    }
}

/// Callback invoked for every progress hook call.
pub type ProgressHook = fn(&ProgressEvent);

fn progress_hook(py: Python<'_>, hook: ProgressHook) -> PyResult<Bound<'_, PyCFunction>> {
    PyCFunction::new_closure(
        py,
        Some(c"progress_hook"),
        None,
        move |args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>| -> PyResult<()> {
            let (raw,): (RawProgress,) = args.extract()?;
            hook(&raw.into());
            Ok(())
        },
    )
}

fn glue(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")
}

/// Download every URL, returning yt-dlp's return code.
///
/// With `ignoreerrors` set, failed items are skipped and reported through a
/// non-zero return code instead of an exception.
pub fn download(
    urls: &[&str],
    opts: DownloadOptions,
    hook: Option<ProgressHook>,
) -> Result<i32, PyErr> {
    Python::attach(|py| {
        let module = glue(py)?;

        let py_params = opts.into_pyobject(py)?;
        let py_hook = hook.map(|hook| progress_hook(py, hook)).transpose()?;

        let retcode = module
            .getattr("download")?
            .call1((urls.to_vec(), py_params, py_hook))?;

        retcode.extract()
    })
}

/// Download a single URL and return the prepared filename with the info dict.
///
/// Uses `extract_info(url, download=True)` to download and get metadata in one request.
/// The filename is the pre-post-processing name, so its extension is the
/// downloaded container's, not the converted one.
pub fn extract(
    url: &str,
    opts: DownloadOptions,
    hook: Option<ProgressHook>,
) -> Result<(PathBuf, DownloadInfo), PyErr> {
    Python::attach(|py| {
        let module = glue(py)?;

        let py_params = opts.into_pyobject(py)?;
        let py_hook = hook.map(|hook| progress_hook(py, hook)).transpose()?;

        let result = module
            .getattr("extract")?
            .call1((url, py_params, py_hook))?;

        result.extract()
    })
}

/// Query metadata without downloading anything.
///
/// Also returns the filename `opts.outtmpl` renders for the result, sanitized
/// the way yt-dlp names files on disk.
pub fn probe(
    url: &str,
    opts: DownloadOptions,
) -> Result<Option<(PathBuf, DownloadInfo)>, PyErr> {
    Python::attach(|py| {
        let module = glue(py)?;

        let py_params = opts.into_pyobject(py)?;

        let info = module.getattr("probe")?.call1((url, py_params))?;

        info.extract()
    })
}
