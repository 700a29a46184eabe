use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

/// Root configuration, one field per `config.toml` section.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub sentry_config: SentryConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub api_server: Vec<ApiServerConfig>,
}
