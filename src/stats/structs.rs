//! Statistics data structures.

/// Snapshot of all counters, serializable for the API.
pub mod stats;

/// Atomic counter storage shared across worker threads.
pub mod stats_atomics;
