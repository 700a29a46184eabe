//! Implementation blocks for storage engines.

/// Trait implementations for the in-memory engine.
pub mod memory_store;
