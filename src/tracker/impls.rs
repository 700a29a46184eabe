//! Implementation blocks for the tracker and its data types.

/// Outcome validation.
pub mod game_outcome;

/// Tracker construction.
pub mod game_tracker;

/// Development certificate generation.
pub mod game_tracker_cert_gen;

/// Nickname registry operations.
pub mod game_tracker_nicknames;

/// Player statistics operations.
pub mod game_tracker_players;

/// Identity parsing, formatting and serialization.
pub mod player_id;

/// Record construction and the outcome update rule.
pub mod player_stats;

/// Aggregate report composition.
pub mod stats_report;
