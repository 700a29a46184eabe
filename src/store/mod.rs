//! Storage abstraction for player statistics and nicknames.
//!
//! All state the service keeps lives behind two capability traits defined
//! here, so the tracker core never knows which engine it is talking to:
//!
//! - `StatsStore` - durable per-player outcome statistics
//! - `NicknameResolver` - the identity-to-nickname registry
//!
//! # Engines
//!
//! - `MemoryStore` - process-local maps, used when persistence is disabled
//! - `DatabaseConnector` - SQLite/MySQL/PostgreSQL via the database module
//!
//! # Atomicity
//!
//! `record_outcome` applies the whole read-modify-write inside the engine
//! (one write guard in memory, one self-referential `UPDATE` in SQL), so
//! concurrent recordings for the same player cannot lose updates.

/// Error types for storage operations.
pub mod errors;

/// Implementation blocks for storage engines.
pub mod impls;

/// Data structures for storage engines.
pub mod structs;

/// Storage capability trait definitions.
pub mod traits;

/// Unit tests for the in-memory engine.
#[cfg(test)]
mod tests;
