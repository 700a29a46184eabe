use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::game_outcome::{GameOutcome, MAX_ATTEMPTS};

impl GameOutcome {
    /// Rejects won outcomes whose attempt number lies outside the board.
    /// Losses pass unconditionally; their `attempts` value is never read.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.won && (self.attempts < 1 || self.attempts as usize > MAX_ATTEMPTS) {
            return Err(TrackerError::AttemptsOutOfRange(self.attempts));
        }
        Ok(())
    }
}
