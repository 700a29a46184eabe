use std::fmt::Debug;
use async_trait::async_trait;
use crate::store::errors::StoreError;
use crate::tracker::structs::player_id::PlayerId;

/// Registry lookup interface for player display nicknames.
#[async_trait]
pub trait NicknameResolver: Send + Sync + Debug {
    /// Resolves the nickname registered for an identity, if any.
    async fn resolve_nickname(&self, id: &PlayerId) -> Result<Option<String>, StoreError>;

    /// Registers or replaces the nickname for an identity.
    async fn set_nickname(&self, id: &PlayerId, nickname: &str) -> Result<(), StoreError>;

    /// Removes a registration. Returns `Ok(false)` when none existed.
    async fn remove_nickname(&self, id: &PlayerId) -> Result<bool, StoreError>;

    /// Number of registered nicknames.
    async fn count_nicknames(&self) -> Result<u64, StoreError>;
}
