//! Dictionary-based sentence parser for Fabula.
//!
//! This crate turns player input like "take red ball" or "put coin in box,
//! then go north" into an [`Order`] that the dispatch engine can process.
//!
//! # Architecture
//!
//! ```text
//! "put coin in box, then go north"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [put, coin, in, box, <terminator>, then, go, north]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → [Verb(put), Noun(coin), Prep(into), Noun(box)]
//! │ LOOKUP          │     (the scan stops at the terminator)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NOUN            │  → object = coin, object2 = box (or ambiguous lists)
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ORDER           │  → verb put, noun coin, prep into, noun2 box,
//! │                 │    remaining "then go north"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - Word classifications and synonym folding
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`order`] - The parsed clause
//! - [`pronouns`] - Pronoun antecedent state
//! - [`resolution`] - Noun → entity resolution
//! - [`parser`] - The parsing pass itself

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod order;
pub mod parser;
pub mod pronouns;
pub mod resolution;
pub mod tokenizer;
pub mod vocabulary;

pub use order::{Order, Word};
pub use parser::Parser;
pub use pronouns::PronounState;
pub use resolution::{NounResolution, resolve_noun};
pub use tokenizer::{InputToken, InputTokenizer};
pub use vocabulary::{Collision, Vocabulary, WordDef, WordKind, WordTables, Words};
