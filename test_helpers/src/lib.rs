//! Test helpers shared across crates.
//!
//! This crate provides a recording deprecation listener and a guard for the
//! process-wide schema cache.

pub mod listener;
pub mod schema_cache;
