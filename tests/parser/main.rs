//! Integration tests for the fabula_parser crate.
//!
//! Tests for the sentence pipeline against the English word tables:
//! - Vocabulary import and synonym folding
//! - Clause parsing and noun resolution
//! - Properties over arbitrary tables and input

mod parsing_tests;
mod property_tests;
mod vocabulary_tests;
