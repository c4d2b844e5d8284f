//! The play loop.
//!
//! The engine never blocks; the session asks the editor for whatever the
//! engine is waiting for and hands it back, until the story quits or the
//! input ends.

use fabula_engine::{Awaiting, Engine};
use fabula_foundation::Result;
use tracing::{debug, info};

use crate::editor::{LineEditor, ReadResult};

/// Drives an engine from a line editor.
pub struct Session<E: LineEditor> {
    engine: Engine,
    editor: E,
    turns: u64,
}

impl<E: LineEditor> Session<E> {
    /// Creates a session for a started engine.
    pub fn new(engine: Engine, editor: E) -> Self {
        Self {
            engine,
            editor,
            turns: 0,
        }
    }

    /// Returns the engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the engine mutably.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Number of inputs delivered so far.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Runs until the story quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails.
    pub fn run(&mut self) -> Result<()> {
        let words = self
            .engine
            .vocabulary()
            .words()
            .into_iter()
            .map(str::to_string)
            .collect();
        self.editor.set_words(words);

        while !self.engine.quit_requested() {
            if !self.step()? {
                break;
            }
        }
        info!(turns = self.turns, quit = self.engine.quit_requested(), "session ended");
        Ok(())
    }

    /// Reads and delivers one input. Returns false at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails.
    pub fn step(&mut self) -> Result<bool> {
        let awaiting = self.engine.awaiting();
        let read = match awaiting {
            Awaiting::Key => self.editor.read_key()?,
            Awaiting::Command | Awaiting::Line => {
                let prompt = self.engine.prompt().to_string();
                self.editor.read_line(&prompt)?
            }
        };

        let line = match read {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                debug!("input interrupted");
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        self.turns += 1;
        match awaiting {
            Awaiting::Command => {
                if !line.trim().is_empty() {
                    self.editor.add_history(&line);
                }
                self.engine.submit_line(&line);
            }
            Awaiting::Line => {
                self.engine.submit_line(&line);
            }
            Awaiting::Key => {
                let key: String = line.chars().next().map_or_else(|| "\n".to_string(), String::from);
                self.engine.submit_key(&key);
            }
        }
        Ok(true)
    }

    /// Ends the session and returns the engine.
    pub fn into_engine(self) -> Engine {
        self.engine
    }
}
