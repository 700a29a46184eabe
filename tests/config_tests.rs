mod common;

use guesstats_actix::config::structs::configuration::Configuration;
use guesstats_actix::database::enums::database_drivers::DatabaseDrivers;

#[tokio::test]
async fn test_config_default_values() {
    let config: common::TestConfig = common::create_test_config().await;
    assert_eq!(config.log_level, "info");
    assert!(config.log_console_interval > 0, "Console interval should be positive");
    assert_eq!(config.tracker_config.api_key, "MyApiKey");
    assert_eq!(config.tracker_config.prometheus_id, "guesstats");
    assert!(!config.database.persistent, "Default should be non-persistent");
    assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
}

#[tokio::test]
async fn test_config_database_structure_defaults() {
    let config: common::TestConfig = common::create_test_config().await;
    assert_eq!(config.database_structure.players.table_name, "players");
    assert_eq!(config.database_structure.players.column_identity, "identity");
    assert_eq!(config.database_structure.players.column_wins_prefix, "won_in_");
    assert_eq!(config.database_structure.nicknames.table_name, "nicknames");
    assert_eq!(config.database_structure.nicknames.column_nickname, "nickname");
}

#[tokio::test]
async fn test_config_api_server_defaults() {
    let config: common::TestConfig = common::create_test_config().await;
    assert!(!config.api_server.is_empty(), "At least one API server block should exist");
    let api_config = &config.api_server[0];
    assert!(api_config.enabled);
    assert!(!api_config.bind_address.is_empty(), "API bind address should not be empty");
    assert!(api_config.threads > 0, "API threads should be positive");
    assert!(!api_config.ssl, "Default should be plain HTTP");
}

#[tokio::test]
async fn test_config_sentry_disabled_by_default() {
    let config: common::TestConfig = common::create_test_config().await;
    assert!(!config.sentry_config.enabled, "Sentry should be opt-in");
    assert!(config.sentry_config.dsn.is_empty());
}

#[tokio::test]
async fn test_config_toml_round_trip() {
    let config = Configuration::init();
    let serialized = toml::to_string(&config).expect("Default config should serialize");

    let parsed = Configuration::load(serialized.as_bytes()).expect("Serialized config should parse back");
    assert_eq!(parsed.log_level, config.log_level);
    assert_eq!(parsed.tracker_config.api_key, config.tracker_config.api_key);
    assert_eq!(parsed.database.engine, config.database.engine);
    assert_eq!(parsed.database_structure.players.table_name, config.database_structure.players.table_name);
    assert_eq!(parsed.api_server.len(), config.api_server.len());
}

#[tokio::test]
async fn test_config_save_and_load_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    let config = Configuration::init();
    Configuration::save_file(path, toml::to_string(&config).unwrap()).expect("Saving should succeed");

    let loaded = Configuration::load_file(path).expect("Saved file should load");
    assert_eq!(loaded.tracker_config.prometheus_id, config.tracker_config.prometheus_id);
}

#[tokio::test]
async fn test_config_load_file_missing() {
    let temp_dir = common::create_temp_dir();
    let missing = temp_dir.path().join("missing.toml");

    let result = Configuration::load_file(missing.to_str().unwrap());
    assert!(result.is_err(), "Missing file should be an error");
}

#[tokio::test]
async fn test_config_load_rejects_garbage() {
    let result = Configuration::load(b"this is not [ valid toml");
    assert!(result.is_err(), "Bad TOML should be an error");
}

#[tokio::test]
async fn test_config_validate_accepts_defaults() {
    let config = Configuration::init();
    Configuration::validate(config);
}

#[tokio::test]
#[should_panic]
async fn test_config_validate_rejects_bad_table_name() {
    let mut config = Configuration::init();
    config.database_structure.players.table_name = String::from("Bad-Name;Drop");
    Configuration::validate(config);
}
