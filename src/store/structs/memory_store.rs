use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;

/// Process-local storage engine.
///
/// Backs both `StatsStore` and `NicknameResolver` when the service runs
/// without a database (`persistent = false`), and doubles as the engine
/// behind the test suites.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub stats: RwLock<BTreeMap<PlayerId, PlayerStats>>,
    pub nicknames: RwLock<BTreeMap<PlayerId, String>>,
}
