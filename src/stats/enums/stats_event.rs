//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific metric that can be incremented
/// or set. Used with `GameTracker::update_stats()` to update counters.
///
/// # Categories
///
/// - **Core Metrics**: Players, Nicknames
/// - **Game Metrics**: GamesRecorded, WinsRecorded, LossesRecorded
/// - **TCP IPv4**: Tcp4* variants
/// - **TCP IPv6**: Tcp6* variants
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    Players,
    Nicknames,
    GamesRecorded,
    WinsRecorded,
    LossesRecorded,
    TimestampConsole,
    Tcp4NotFound,
    Tcp4Failure,
    Tcp4ConnectionsHandled,
    Tcp4ApiHandled,
    Tcp6NotFound,
    Tcp6Failure,
    Tcp6ConnectionsHandled,
    Tcp6ApiHandled,
}
