//! Integration tests for the fabula_engine crate.
//!
//! Tests for the dispatch layers and the turn state machine:
//! - Layer order and who gets to claim an order
//! - Suspension with WAIT and ASK
//! - Configuration and host-facing state

mod common;
mod config_tests;
mod dispatch_tests;
mod suspension_tests;
