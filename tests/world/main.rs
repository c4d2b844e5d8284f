//! Integration tests for the fabula_world crate.
//!
//! Tests for world state across records:
//! - Differential snapshots, reset and restore
//! - Reachability through locations, reach rules and containers

mod reach_tests;
mod snapshot_tests;
