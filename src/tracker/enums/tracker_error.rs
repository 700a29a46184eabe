use thiserror::Error;
use crate::store::errors::StoreError;
use crate::tracker::structs::player_id::PlayerId;

/// Errors returned by the tracker operations.
///
/// The two not-found variants stay separate so callers always know which
/// collaborator came up empty, and storage failures never masquerade as
/// missing records.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("no statistics recorded for player {0}")]
    StatsNotFound(PlayerId),

    #[error("no nickname registered for player {0}")]
    NicknameNotFound(PlayerId),

    #[error("statistics already recorded for player {0}")]
    AlreadyExists(PlayerId),

    #[error("winning attempts must be between 1 and 6, got {0}")]
    AttemptsOutOfRange(u8),

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}
