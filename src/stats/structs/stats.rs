use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of every service counter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub players: i64,
    pub nicknames: i64,
    pub games_recorded: i64,
    pub wins_recorded: i64,
    pub losses_recorded: i64,
    pub tcp4_connections_handled: i64,
    pub tcp4_api_handled: i64,
    pub tcp4_not_found: i64,
    pub tcp4_failure: i64,
    pub tcp6_connections_handled: i64,
    pub tcp6_api_handled: i64,
    pub tcp6_not_found: i64,
    pub tcp6_failure: i64,
}
