//! Single-line terminal progress for yt-dlp downloads.

use std::io::Write;
use tubemp3_dl::dl::{ProgressEvent, ProgressStatus};

/// Columns blanked when a download finishes.
const LINE_WIDTH: usize = 80;

/// Text to print for an event, if any.
///
/// Download updates end in `\r` so the next one overwrites them.
pub fn render(event: &ProgressEvent) -> Option<String> {
    match event.status {
        ProgressStatus::Downloading => Some(format!(
            "[downloading] {} - {}\r",
            event.percent, event.title
        )),
        ProgressStatus::Finished => Some(format!(
            "{}\r[converting] finalizing {}...\n",
            " ".repeat(LINE_WIDTH),
            event.title
        )),
        ProgressStatus::Other(_) => None,
    }
}

/// Progress hook writing [`render`] output to stdout.
pub fn report(event: &ProgressEvent) {
    let Some(line) = render(event) else {
        return;
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(line.as_bytes()).and_then(|()| stdout.flush()) {
        tracing::debug!(error = %e, "failed to write progress");
    }
}
