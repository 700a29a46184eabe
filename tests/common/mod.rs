#![allow(dead_code)]
use rand::RngExt;
use std::str::FromStr;
use std::sync::Arc;
use tempfile::TempDir;
use guesstats_actix::config::structs::api_server_config::ApiServerConfig;
use guesstats_actix::config::structs::configuration::Configuration;
use guesstats_actix::tracker::structs::game_tracker::GameTracker;
use guesstats_actix::tracker::structs::player_id::PlayerId;
use guesstats_actix::tracker::structs::player_stats::PlayerStats;

pub type TestTracker = Arc<GameTracker>;
pub type TestConfig = Arc<Configuration>;

pub async fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.path = ":memory:".to_string();
    config.database.persistent = false;
    Arc::new(config)
}

pub fn create_test_api_config() -> Arc<ApiServerConfig> {
    Arc::new(ApiServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:8081".to_string(),
        real_ip: "X-Real-IP".to_string(),
        trusted_proxies: false,
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        max_connections: 1000,
        threads: 4,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
        tls_connection_rate: 100,
    })
}

pub async fn create_test_tracker() -> TestTracker {
    let config: TestConfig = create_test_config().await;
    Arc::new(GameTracker::new(config, false).await)
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_player_id() -> PlayerId {
    let mut rng = rand::rng();
    let number: u64 = rng.random();
    PlayerId(format!("player{}@example.com", number))
}

pub fn player_id(identity: &str) -> PlayerId {
    PlayerId::from_str(identity).expect("Identity fixture should parse")
}

/// A player with some history: 10 games, 6 won, 4 lost,
/// wins spread over attempts 1 through 6 as [1, 2, 1, 1, 0, 1].
pub fn seeded_player_stats(identity: &str) -> PlayerStats {
    let mut stats = PlayerStats::new(player_id(identity));
    stats.total_games = 10;
    stats.games_won = 6;
    stats.games_lost = 4;
    stats.wins_by_attempt = [1, 2, 1, 1, 0, 1];
    stats.updated = 1_700_000_000;
    stats
}
