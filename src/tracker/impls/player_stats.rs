use chrono::Utc;
use crate::tracker::structs::game_outcome::{GameOutcome, MAX_ATTEMPTS};
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;

impl PlayerStats {
    /// A brand-new record: every counter zero, every bucket empty.
    pub fn new(identity: PlayerId) -> PlayerStats {
        PlayerStats {
            identity,
            total_games: 0,
            games_won: 0,
            games_lost: 0,
            wins_by_attempt: [0u64; MAX_ATTEMPTS],
            updated: Utc::now().timestamp() as u64,
        }
    }

    /// The single update rule. The outcome must already be validated;
    /// a win lands in the bucket of its attempt number, a loss only
    /// moves the totals.
    pub fn apply(&mut self, outcome: &GameOutcome) {
        debug_assert!(outcome.validate().is_ok());
        self.total_games += 1;
        if outcome.won {
            self.games_won += 1;
            self.wins_by_attempt[(outcome.attempts - 1) as usize] += 1;
        } else {
            self.games_lost += 1;
        }
        self.updated = Utc::now().timestamp() as u64;
    }

    /// True when both record invariants hold.
    pub fn is_consistent(&self) -> bool {
        self.games_won + self.games_lost == self.total_games
            && self.wins_by_attempt.iter().sum::<u64>() == self.games_won
    }
}
