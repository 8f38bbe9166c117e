//! Interactive prompts for the mode and URL.
//!
//! Reads from any [`BufRead`] and writes to any [`Write`] so the questions can
//! be driven from tests; the CLI passes locked stdin and stdout.

use crate::config::Mode;
use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Map an answer to a mode by its first letter, ignoring case and surrounding space.
pub fn parse_mode(answer: &str) -> Result<Mode> {
    let answer = answer.trim().to_lowercase();

    if answer.starts_with('m') {
        Ok(Mode::Music)
    } else if answer.starts_with('p') {
        Ok(Mode::Playlist)
    } else {
        Err(Error::InvalidMode(answer))
    }
}

/// Trimmed URL, or [`Error::MissingUrl`] when blank.
pub fn require_url(url: &str) -> Result<String> {
    match url.trim() {
        "" => Err(Error::MissingUrl),
        url => Ok(url.to_string()),
    }
}

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` on the current line and read one trimmed answer.
    ///
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(answer.trim().to_string())
    }

    pub fn mode(&mut self) -> Result<Mode> {
        let answer = self.ask("Download a single song or a playlist? (m/p): ")?;
        parse_mode(&answer)
    }

    pub fn url(&mut self, mode: Mode) -> Result<String> {
        let message = match mode {
            Mode::Music => "YouTube video URL: ",
            Mode::Playlist => "YouTube playlist URL: ",
        };

        let answer = self.ask(message)?;
        require_url(&answer)
    }
}
