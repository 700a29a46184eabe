//! Implementation blocks for statistics operations.

/// Statistics accessors and mutators on the tracker.
pub mod game_tracker;
