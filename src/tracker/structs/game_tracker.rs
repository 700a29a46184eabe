use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::nickname_resolver::NicknameResolver;
use crate::store::traits::stats_store::StatsStore;

/// Central service object.
///
/// Owns the configuration, the service counters, and the two storage
/// capabilities behind trait objects. Which engine backs the traits is
/// decided once at construction from `[database] persistent`.
#[derive(Debug)]
pub struct GameTracker {
    pub config: Arc<Configuration>,
    pub store: Arc<dyn StatsStore>,
    pub nicknames: Arc<dyn NicknameResolver>,
    pub stats: Arc<StatsAtomics>,
}
