//! One finished game, as reported to the service.

use serde::{Deserialize, Serialize};

/// Number of guesses the game board allows.
pub const MAX_ATTEMPTS: usize = 6;

/// A finished game event.
///
/// `attempts` carries the 1-based attempt number the winning guess landed
/// on and is only meaningful when `won` is true; losses ignore it entirely.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts: u8,
}
