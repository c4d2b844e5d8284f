//! Core types, errors, and turn results for Fabula.
//!
//! This crate provides:
//! - [`Value`] - Scalar values stored in save-state diffs
//! - [`TurnResult`] - The closed set of outcomes of a dispatched command
//! - [`Error`] - Error types with optional context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod turn;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use turn::TurnResult;
pub use value::{FieldValue, Value};
