use std::collections::btree_map::Entry;
use async_trait::async_trait;
use crate::store::errors::StoreError;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::traits::nickname_resolver::NicknameResolver;
use crate::store::traits::stats_store::StatsStore;
use crate::tracker::structs::game_outcome::GameOutcome;
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

#[async_trait]
impl StatsStore for MemoryStore {
    async fn create_stats(&self, stats: PlayerStats) -> Result<bool, StoreError> {
        let mut lock = self.stats.write();
        match lock.entry(stats.identity.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert(stats);
                Ok(true)
            }
            Entry::Occupied(_) => Ok(false)
        }
    }

    async fn find_stats(&self, id: &PlayerId) -> Result<Option<PlayerStats>, StoreError> {
        let lock = self.stats.read_recursive();
        Ok(lock.get(id).cloned())
    }

    async fn record_outcome(&self, id: &PlayerId, outcome: &GameOutcome) -> Result<Option<PlayerStats>, StoreError> {
        // Whole read-modify-write under one guard so concurrent recordings serialize.
        let mut lock = self.stats.write();
        match lock.get_mut(id) {
            None => Ok(None),
            Some(stats) => {
                stats.apply(outcome);
                Ok(Some(stats.clone()))
            }
        }
    }

    async fn remove_stats(&self, id: &PlayerId) -> Result<bool, StoreError> {
        let mut lock = self.stats.write();
        Ok(lock.remove(id).is_some())
    }

    async fn count_stats(&self) -> Result<u64, StoreError> {
        let lock = self.stats.read_recursive();
        Ok(lock.len() as u64)
    }
}

#[async_trait]
impl NicknameResolver for MemoryStore {
    async fn resolve_nickname(&self, id: &PlayerId) -> Result<Option<String>, StoreError> {
        let lock = self.nicknames.read_recursive();
        Ok(lock.get(id).cloned())
    }

    async fn set_nickname(&self, id: &PlayerId, nickname: &str) -> Result<(), StoreError> {
        let mut lock = self.nicknames.write();
        lock.insert(id.clone(), nickname.to_string());
        Ok(())
    }

    async fn remove_nickname(&self, id: &PlayerId) -> Result<bool, StoreError> {
        let mut lock = self.nicknames.write();
        Ok(lock.remove(id).is_some())
    }

    async fn count_nicknames(&self) -> Result<u64, StoreError> {
        let lock = self.nicknames.read_recursive();
        Ok(lock.len() as u64)
    }
}
