//! MP3 preset: best available audio, transcoded by ffmpeg with tags and cover art.
//!
//! ```no_run
//! use tubemp3_dl::{dl::extract, mp3::Mp3Preset};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! extract("https://youtube.com/watch?v=example", Mp3Preset::default().into(), None)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `<home>/title.mp3` with embedded metadata and thumbnail

use crate::dl::{DownloadOptions, PostProcessor};

/// Retries yt-dlp performs on transient network failures.
pub const RETRIES: u32 = 3;

/// MP3 transcoding settings.
#[derive(Copy, Clone, Debug)]
pub struct Mp3Preset {
    /// Target bitrate in kbps
    pub bitrate: u32,
}

impl Default for Mp3Preset {
    fn default() -> Self {
        Self { bitrate: 192 }
    }
}

impl From<Mp3Preset> for Vec<PostProcessor> {
    /// Extract audio to MP3, then write tags and embed the thumbnail into the MP3.
    fn from(preset: Mp3Preset) -> Self {
        vec![
            PostProcessor::extract_audio("mp3", &preset.bitrate.to_string()),
            PostProcessor::new("FFmpegMetadata"),
            PostProcessor::new("EmbedThumbnail"),
        ]
    }
}

impl From<Mp3Preset> for DownloadOptions {
    /// Best audio → MP3, thumbnail downloaded for embedding, 3 retries, progress output on
    fn from(preset: Mp3Preset) -> Self {
        Self {
            format: Some("bestaudio/best".to_string()),
            retries: Some(RETRIES),
            postprocessors: Some(preset.into()),
            writethumbnail: Some(true),
            quiet: Some(false),
            no_warnings: Some(true),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_default_bitrate() {
        assert_eq!(Mp3Preset::default().bitrate, 192);
    }

    #[test]
    fn test_preset_to_postprocessors() {
        let processors: Vec<PostProcessor> = Mp3Preset { bitrate: 320 }.into();
        let keys: Vec<&str> = processors.iter().map(|p| p.key.as_str()).collect();

        assert_eq!(keys, ["FFmpegExtractAudio", "FFmpegMetadata", "EmbedThumbnail"]);
        assert_eq!(processors[0].preferredcodec.as_deref(), Some("mp3"));
        assert_eq!(processors[0].preferredquality.as_deref(), Some("320"));
        assert!(processors[1].preferredcodec.is_none());
    }

    #[test]
    fn test_preset_to_dl_options() {
        let opts: DownloadOptions = Mp3Preset::default().into();

        assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
        assert!(matches!(
            opts,
            DownloadOptions {
                format: Some(_),
                paths: None,
                outtmpl: None,
                ignoreerrors: None,
                retries: Some(RETRIES),
                postprocessors: Some(_),
                writethumbnail: Some(true),
                noplaylist: None,
                skip_download: None,
                extract_flat: None,
                quiet: Some(false),
                no_warnings: Some(true),
                ffmpeg_location: None,
            }
        ));
    }
}
