use serde::{Deserialize, Serialize};
use crate::tracker::structs::game_outcome::MAX_ATTEMPTS;
use crate::tracker::structs::player_id::PlayerId;

/// Aggregate read model: one player's counters flattened together with
/// the nickname resolved from the registry.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatsReport {
    pub identity: PlayerId,
    pub nickname: String,
    pub total_games: u64,
    pub games_won: u64,
    pub games_lost: u64,
    pub wins_by_attempt: [u64; MAX_ATTEMPTS],
    pub updated: u64,
}
