//! Data structures for storage engines.

/// Process-local engine backing both capability traits.
pub mod memory_store;
