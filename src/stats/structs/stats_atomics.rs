use std::sync::atomic::AtomicI64;

/// Lock-free counter storage behind the statistics API.
#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub players: AtomicI64,
    pub nicknames: AtomicI64,
    pub games_recorded: AtomicI64,
    pub wins_recorded: AtomicI64,
    pub losses_recorded: AtomicI64,
    pub tcp4_connections_handled: AtomicI64,
    pub tcp4_api_handled: AtomicI64,
    pub tcp4_not_found: AtomicI64,
    pub tcp4_failure: AtomicI64,
    pub tcp6_connections_handled: AtomicI64,
    pub tcp6_api_handled: AtomicI64,
    pub tcp6_not_found: AtomicI64,
    pub tcp6_failure: AtomicI64,
}
