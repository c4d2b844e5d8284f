//! Terminal output.

use std::io::{self, Stdout, Write};

use fabula_engine::Output;
use tracing::warn;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes story text to a terminal and keeps the raw transcript.
///
/// `<b>` markup becomes bold; with styling off it is dropped.
pub struct TerminalOutput<W: Write = Stdout> {
    writer: W,
    transcript: String,
    styled: bool,
}

impl TerminalOutput<Stdout> {
    /// Writes to standard output with styling.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    /// Writes to the given writer with styling.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            transcript: String::new(),
            styled: true,
        }
    }

    /// Builder method to drop markup instead of styling it.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.styled = false;
        self
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn styled_text(&self, text: &str) -> String {
        let (bold, reset) = if self.styled { (BOLD, RESET) } else { ("", "") };
        text.replace("<b>", bold).replace("</b>", reset)
    }

    fn write(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "could not write story text");
        }
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn print(&mut self, text: &str) {
        self.transcript.push_str(text);
        let shown = self.styled_text(text);
        self.write(&shown);
    }

    fn clear(&mut self) {
        self.transcript.clear();
        if self.styled {
            self.write(CLEAR_SCREEN);
        }
    }

    fn transcript(&self) -> &str {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_markup_is_styled() {
        let mut out = TerminalOutput::new(Vec::new());
        out.print("<b>Shore</b>\nWaves.\n");
        assert_eq!(
            String::from_utf8(out.writer().clone()).unwrap(),
            "\x1b[1mShore\x1b[0m\nWaves.\n"
        );
        assert_eq!(out.transcript(), "<b>Shore</b>\nWaves.\n");
    }

    #[test]
    fn plain_output_drops_markup() {
        let mut out = TerminalOutput::new(Vec::new()).plain();
        out.print("<b>Shore</b>\n");
        assert_eq!(out.writer().as_slice(), b"Shore\n");
    }

    #[test]
    fn clear_resets_transcript() {
        let mut out = TerminalOutput::new(Vec::new()).plain();
        out.print("Hello.\n");
        out.clear();
        assert!(out.transcript().is_empty());
        assert_eq!(out.writer().as_slice(), b"Hello.\n");
    }
}
