//! Error types for the Fabula system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Turn dispatch never produces these; they cover persisted data,
//! save files, and lookups by key.

use thiserror::Error;

/// The main error type for Fabula operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField {
            owner: owner.into(),
            field: field.into(),
        })
    }

    /// Creates a field type mismatch error.
    #[must_use]
    pub fn field_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::new(ErrorKind::FieldType {
            field: field.into(),
            expected,
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn unknown_entity(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEntity(key.into()))
    }

    /// Creates a location not found error.
    #[must_use]
    pub fn unknown_location(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocation(key.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A diff named a field the target record does not have.
    #[error("unknown field '{field}' on {owner}")]
    UnknownField {
        /// The record the field was applied to.
        owner: String,
        /// The field name.
        field: String,
    },

    /// A diff carried a value of the wrong shape for a field.
    #[error("field '{field}' expects {expected}")]
    FieldType {
        /// The field name.
        field: String,
        /// Description of the expected value.
        expected: &'static str,
    },

    /// Entity key was not found in the world.
    #[error("entity not found: {0}")]
    UnknownEntity(String),

    /// Location key was not found in the world.
    #[error("location not found: {0}")]
    UnknownLocation(String),

    /// Save-state encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using the Fabula error type.
pub type Result<T> = std::result::Result<T, Error>;
