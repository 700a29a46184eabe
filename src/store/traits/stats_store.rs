use std::fmt::Debug;
use async_trait::async_trait;
use crate::store::errors::StoreError;
use crate::tracker::structs::game_outcome::GameOutcome;
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;

/// Storage engine interface for per-player outcome statistics.
///
/// Absence and failure are kept apart everywhere: `Ok(None)` / `Ok(false)`
/// mean the record was not there, `Err` means the engine broke.
#[async_trait]
pub trait StatsStore: Send + Sync + Debug {
    /// Insert-if-absent. Returns `Ok(false)` when a record for the identity
    /// already exists; the stored record is left untouched in that case.
    async fn create_stats(&self, stats: PlayerStats) -> Result<bool, StoreError>;

    /// Point read of one record.
    async fn find_stats(&self, id: &PlayerId) -> Result<Option<PlayerStats>, StoreError>;

    /// Applies one validated outcome to the stored record and returns the
    /// post-update record, or `Ok(None)` when no record exists. The
    /// read-modify-write is atomic inside the engine.
    async fn record_outcome(&self, id: &PlayerId, outcome: &GameOutcome) -> Result<Option<PlayerStats>, StoreError>;

    /// Administrative removal. Returns `Ok(false)` when nothing was stored.
    async fn remove_stats(&self, id: &PlayerId) -> Result<bool, StoreError>;

    /// Number of stored player records.
    async fn count_stats(&self) -> Result<u64, StoreError>;
}
