use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::traits::nickname_resolver::NicknameResolver;
use crate::store::traits::stats_store::StatsStore;
use crate::tracker::structs::game_tracker::GameTracker;

impl GameTracker {
    #[tracing::instrument(level = "debug")]
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> GameTracker
    {
        let (store, nicknames): (Arc<dyn StatsStore>, Arc<dyn NicknameResolver>) = if config.database.persistent {
            let connector = Arc::new(DatabaseConnector::new(config.clone(), create_database).await);
            (connector.clone(), connector)
        } else {
            let memory = Arc::new(MemoryStore::new());
            (memory.clone(), memory)
        };

        GameTracker {
            config: config.clone(),
            store,
            nicknames,
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                timestamp_run_console: AtomicI64::new(0),
                players: AtomicI64::new(0),
                nicknames: AtomicI64::new(0),
                games_recorded: AtomicI64::new(0),
                wins_recorded: AtomicI64::new(0),
                losses_recorded: AtomicI64::new(0),
                tcp4_connections_handled: AtomicI64::new(0),
                tcp4_api_handled: AtomicI64::new(0),
                tcp4_not_found: AtomicI64::new(0),
                tcp4_failure: AtomicI64::new(0),
                tcp6_connections_handled: AtomicI64::new(0),
                tcp6_api_handled: AtomicI64::new(0),
                tcp6_not_found: AtomicI64::new(0),
                tcp6_failure: AtomicI64::new(0),
            }),
        }
    }
}
