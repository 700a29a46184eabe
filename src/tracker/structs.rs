//! Core data structures.

/// One finished game event.
pub mod game_outcome;

/// Central service object owning configuration, storage and counters.
pub mod game_tracker;

/// Unique player identity (e-mail-shaped string).
pub mod player_id;

/// Per-player outcome statistics record.
pub mod player_stats;

/// Aggregate read model combining counters with the resolved nickname.
pub mod stats_report;
