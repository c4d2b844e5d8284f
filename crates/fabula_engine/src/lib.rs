//! Dispatch engine and turn state machine for Fabula.
//!
//! This crate provides:
//! - [`Engine`] - Layered command dispatch, turn resolution and suspension
//! - [`Module`] - The authoring unit: words, records, responses and hooks
//! - [`ResponseTable`] - Compiled phrase patterns with canned outcomes
//! - [`message`] - Person, article and list codes in story text
//! - [`Output`] / [`SaveStore`] - The host boundaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod hooks;
pub mod message;
pub mod module;
pub mod output;
pub mod response;
pub mod store;

pub use config::EngineConfig;
pub use engine::{Awaiting, Continuation, Engine};
pub use hooks::{
    AfterDescriptionHook, AfterHook, CheckHook, Condition, DescriptionHook, EntityAfterHook,
    EntityCondition, EntityHook, EntityHooks, LifecycleHook, LocationHooks, ModuleHooks, OrderHook,
};
pub use message::{Param, Subject};
pub use module::{EntityDef, LocationDef, Module};
pub use output::{BufferOutput, Output, Request};
pub use response::{Handler, Owner, Pattern, PatternWord, RejectedPattern, Response, ResponseTable, Responses};
pub use store::{MemoryStore, SaveStore};
