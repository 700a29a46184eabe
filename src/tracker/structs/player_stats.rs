//! Per-player outcome statistics record.

use serde::{Deserialize, Serialize};
use crate::tracker::structs::game_outcome::MAX_ATTEMPTS;
use crate::tracker::structs::player_id::PlayerId;

/// Cumulative outcome statistics for one player.
///
/// Two invariants hold after every mutation:
/// - `games_won + games_lost == total_games`
/// - the win buckets sum to `games_won`
///
/// All counters are monotonic; nothing in the service ever decrements them.
///
/// # Win Buckets
///
/// `wins_by_attempt` is indexed 0-based: slot `i` counts the wins whose
/// winning guess landed on attempt `i + 1`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerStats {
    /// The identity this record belongs to.
    pub identity: PlayerId,

    /// Number of finished games recorded.
    pub total_games: u64,

    /// Number of recorded wins.
    pub games_won: u64,

    /// Number of recorded losses.
    pub games_lost: u64,

    /// Histogram of wins by winning attempt number.
    pub wins_by_attempt: [u64; MAX_ATTEMPTS],

    /// Unix timestamp of the last mutation.
    pub updated: u64,
}
