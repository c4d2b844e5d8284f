//! Line editors for the session.
//!
//! The session only needs lines of text; this trait keeps it independent of
//! the terminal library and lets tests and `--script` runs feed input from
//! memory.

use std::borrow::Cow;
use std::collections::VecDeque;

use fabula_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line of text.
    Line(String),
    /// The user pressed Ctrl+C.
    Interrupted,
    /// End of input (Ctrl+D, or the script ran out).
    Eof,
}

/// Source of player input.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Reads a key press. Line-based editors read a line and the session
    /// takes its first character.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_key(&mut self) -> Result<ReadResult> {
        self.read_line("")
    }

    /// Adds a command to the history.
    fn add_history(&mut self, line: &str);

    /// Sets the words offered for completion.
    fn set_words(&mut self, words: Vec<String>);
}

// =============================================================================
// Rustyline
// =============================================================================

#[derive(Helper, Completer, Hinter, Validator)]
struct StoryHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for StoryHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(&'s self, prompt: &'p str, default: bool) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes the word under the cursor from the story vocabulary.
#[derive(Default)]
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let prefix = line[start..pos].to_lowercase();
        let candidates = self
            .words
            .iter()
            .filter(|w| !prefix.is_empty() && w.starts_with(&prefix))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Interactive editor with history and vocabulary completion.
pub struct RustylineEditor {
    editor: Editor<StoryHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a terminal editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let internal = |e: ReadlineError| Error::new(ErrorKind::Internal(e.to_string()));
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(internal)?
            .build();
        let mut editor = Editor::with_config(config).map_err(internal)?;
        editor.set_helper(Some(StoryHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
        }));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry dropped");
        }
    }

    fn set_words(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}

// =============================================================================
// Scripted input
// =============================================================================

/// Feeds prepared lines, then reports end of input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    history: Vec<String>,
    echo: bool,
}

impl ScriptedEditor {
    /// Creates an editor that will return these lines in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builder method to print each prompt and line as it is read.
    #[must_use]
    pub fn with_echo(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines added to the history.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Lines not read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        let Some(line) = self.lines.pop_front() else {
            return Ok(ReadResult::Eof);
        };
        if self.echo {
            println!("{prompt}{line}");
        }
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_words(&mut self, _words: Vec<String>) {}
}
