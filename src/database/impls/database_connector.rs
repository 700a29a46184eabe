use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::helpers::engine_name;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::store::errors::StoreError;
use crate::store::traits::nickname_resolver::NicknameResolver;
use crate::store::traits::stats_store::StatsStore;
use crate::tracker::structs::game_outcome::GameOutcome;
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;

impl DatabaseConnector {
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> DatabaseConnector
    {
        info!("[BOOT] Connecting to {} storage", engine_name(config.database.engine));
        match &config.database.engine {
            DatabaseDrivers::sqlite3 => { DatabaseConnectorSQLite::database_connector(config.clone(), create_database).await }
            DatabaseDrivers::mysql => { DatabaseConnectorMySQL::database_connector(config.clone(), create_database).await }
            DatabaseDrivers::pgsql => { DatabaseConnectorPgSQL::database_connector(config.clone(), create_database).await }
        }
    }
}

#[async_trait]
impl StatsStore for DatabaseConnector {
    async fn create_stats(&self, stats: PlayerStats) -> Result<bool, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().create_stats(self.config.clone(), stats).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().create_stats(self.config.clone(), stats).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().create_stats(self.config.clone(), stats).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn find_stats(&self, id: &PlayerId) -> Result<Option<PlayerStats>, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().find_stats(self.config.clone(), id).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().find_stats(self.config.clone(), id).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().find_stats(self.config.clone(), id).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn record_outcome(&self, id: &PlayerId, outcome: &GameOutcome) -> Result<Option<PlayerStats>, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().record_outcome(self.config.clone(), id, outcome).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().record_outcome(self.config.clone(), id, outcome).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().record_outcome(self.config.clone(), id, outcome).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn remove_stats(&self, id: &PlayerId) -> Result<bool, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().remove_stats(self.config.clone(), id).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().remove_stats(self.config.clone(), id).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().remove_stats(self.config.clone(), id).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn count_stats(&self) -> Result<u64, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().count_stats(self.config.clone()).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().count_stats(self.config.clone()).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().count_stats(self.config.clone()).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }
}

#[async_trait]
impl NicknameResolver for DatabaseConnector {
    async fn resolve_nickname(&self, id: &PlayerId) -> Result<Option<String>, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().resolve_nickname(self.config.clone(), id).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().resolve_nickname(self.config.clone(), id).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().resolve_nickname(self.config.clone(), id).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn set_nickname(&self, id: &PlayerId, nickname: &str) -> Result<(), StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().set_nickname(self.config.clone(), id, nickname).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().set_nickname(self.config.clone(), id, nickname).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().set_nickname(self.config.clone(), id, nickname).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn remove_nickname(&self, id: &PlayerId) -> Result<bool, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().remove_nickname(self.config.clone(), id).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().remove_nickname(self.config.clone(), id).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().remove_nickname(self.config.clone(), id).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }

    async fn count_nicknames(&self) -> Result<u64, StoreError>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { Ok(self.sqlite.clone().unwrap().count_nicknames(self.config.clone()).await?) }
                DatabaseDrivers::mysql => { Ok(self.mysql.clone().unwrap().count_nicknames(self.config.clone()).await?) }
                DatabaseDrivers::pgsql => { Ok(self.pgsql.clone().unwrap().count_nicknames(self.config.clone()).await?) }
            };
        }

        Err(StoreError::NoEngine)
    }
}
