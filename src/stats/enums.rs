//! Statistics enumerations.

/// Event variants addressing the individual counters.
pub mod stats_event;
