//! Cross-layer integration tests for Fabula
//!
//! Tests that play the demo story through the English module, the engine
//! and the runtime together.

mod common;
mod properties;
mod save_files;
mod walkthrough;
