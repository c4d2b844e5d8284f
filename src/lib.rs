//! Fabula - Interactive-fiction command interpreter
//!
//! This crate re-exports all layers of the Fabula system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: fabula_runtime    - Terminal session, CLI, save files, demo story
//!          fabula_stdlib     - English vocabulary and the stock verbs
//! Layer 3: fabula_engine     - Layered dispatch, turn state machine, messages
//! Layer 2: fabula_parser     - Vocabulary, tokenizer, orders, noun resolution
//! Layer 1: fabula_world      - Entities, locations, player, differential snapshots
//! Layer 0: fabula_foundation - Core types (TurnResult, Value, Error)
//! ```

pub use fabula_engine as engine;
pub use fabula_foundation as foundation;
pub use fabula_parser as parser;
pub use fabula_runtime as runtime;
pub use fabula_stdlib as stdlib;
pub use fabula_world as world;
