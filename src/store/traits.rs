//! Storage capability trait definitions.

/// Durable per-player outcome statistics.
pub mod stats_store;

/// Identity-to-nickname registry access.
pub mod nickname_resolver;
