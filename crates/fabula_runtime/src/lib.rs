//! Terminal session, CLI, and save files for Fabula.
//!
//! This crate provides:
//! - [`Session`] - Drives an engine from a line editor until quit or EOF
//! - [`TerminalOutput`] - Prints story text to a terminal, keeping a transcript
//! - [`RustylineEditor`] / [`ScriptedEditor`] - Interactive and batch input
//! - Save states as `MessagePack` bytes and files, with [`FileStore`]
//! - [`demo`] - A small story for the binary and the tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod output;
pub mod serialize;
pub mod session;

pub use demo::demo;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use output::TerminalOutput;
pub use serialize::{FileStore, from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;
