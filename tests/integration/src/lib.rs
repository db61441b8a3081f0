//! Integration test utilities for the bridge gateway
//!
//! This crate provides helpers for running end-to-end tests against a real
//! listener, backed either by in-memory stores or by live databases.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
