mod common;

use std::sync::Arc;
use tempfile::TempDir;
use guesstats_actix::config::structs::configuration::Configuration;
use guesstats_actix::database::enums::database_drivers::DatabaseDrivers;
use guesstats_actix::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use guesstats_actix::database::structs::database_connector::DatabaseConnector;
use guesstats_actix::store::traits::nickname_resolver::NicknameResolver;
use guesstats_actix::store::traits::stats_store::StatsStore;
use guesstats_actix::tracker::structs::game_outcome::GameOutcome;
use guesstats_actix::tracker::structs::game_tracker::GameTracker;

fn create_sqlite_test_config(temp_dir: &TempDir) -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.database.engine = DatabaseDrivers::sqlite3;
    config.database.persistent = true;
    config.database.path = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    Arc::new(config)
}

async fn create_test_connector(config: Arc<Configuration>) -> DatabaseConnector {
    let pool = DatabaseConnectorSQLite::create(&config.database.path).await.expect("Pool creation should succeed");
    DatabaseConnectorSQLite::create_tables(&pool, config.clone()).await.expect("Table creation should succeed");
    pool.close().await;
    DatabaseConnector::new(config, false).await
}

#[tokio::test]
async fn test_database_starts_empty() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    assert_eq!(connector.count_stats().await.unwrap(), 0, "Fresh database should hold no players");
    assert_eq!(connector.count_nicknames().await.unwrap(), 0, "Fresh database should hold no nicknames");
}

#[tokio::test]
async fn test_database_create_and_find_stats() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let seeded = common::seeded_player_stats("alice@example.com");
    let created = connector.create_stats(seeded.clone()).await.unwrap();
    assert!(created, "First insert should report a new row");

    let stored = connector.find_stats(&seeded.identity).await.unwrap().expect("Record should be found");
    assert_eq!(stored.identity, seeded.identity);
    assert_eq!(stored.total_games, 10);
    assert_eq!(stored.games_won, 6);
    assert_eq!(stored.games_lost, 4);
    assert_eq!(stored.wins_by_attempt, [1, 2, 1, 1, 0, 1]);
    assert_eq!(stored.updated, 1_700_000_000);
}

#[tokio::test]
async fn test_database_create_duplicate_ignored() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let seeded = common::seeded_player_stats("bob@example.com");
    assert!(connector.create_stats(seeded.clone()).await.unwrap());

    let mut second = common::seeded_player_stats("bob@example.com");
    second.total_games = 99;
    let created = connector.create_stats(second).await.unwrap();
    assert!(!created, "Second insert for the same identity should be ignored");

    let stored = connector.find_stats(&seeded.identity).await.unwrap().unwrap();
    assert_eq!(stored.total_games, 10, "Original record should survive the duplicate insert");
}

#[tokio::test]
async fn test_database_record_outcome_win() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let seeded = common::seeded_player_stats("carol@example.com");
    let player = seeded.identity.clone();
    connector.create_stats(seeded).await.unwrap();

    let outcome = GameOutcome { won: true, attempts: 3 };
    let updated = connector.record_outcome(&player, &outcome).await.unwrap().expect("Record should exist");

    assert_eq!(updated.total_games, 11);
    assert_eq!(updated.games_won, 7);
    assert_eq!(updated.games_lost, 4);
    assert_eq!(updated.wins_by_attempt, [1, 2, 2, 1, 0, 1]);
    assert!(updated.updated > 1_700_000_000, "Update timestamp should move forward");
    assert!(updated.is_consistent());
}

#[tokio::test]
async fn test_database_record_outcome_loss() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let seeded = common::seeded_player_stats("dave@example.com");
    let player = seeded.identity.clone();
    connector.create_stats(seeded).await.unwrap();

    let outcome = GameOutcome { won: false, attempts: 0 };
    let updated = connector.record_outcome(&player, &outcome).await.unwrap().expect("Record should exist");

    assert_eq!(updated.total_games, 11);
    assert_eq!(updated.games_won, 6);
    assert_eq!(updated.games_lost, 5);
    assert_eq!(updated.wins_by_attempt, [1, 2, 1, 1, 0, 1], "A loss should not touch the histogram");
}

#[tokio::test]
async fn test_database_record_outcome_absent_player() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let player = common::random_player_id();
    let outcome = GameOutcome { won: true, attempts: 1 };

    let result = connector.record_outcome(&player, &outcome).await.unwrap();
    assert!(result.is_none(), "No row should be created for an unknown identity");
    assert_eq!(connector.count_stats().await.unwrap(), 0);
}

#[tokio::test]
async fn test_database_remove_stats() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let seeded = common::seeded_player_stats("erin@example.com");
    let player = seeded.identity.clone();
    connector.create_stats(seeded).await.unwrap();

    assert!(connector.remove_stats(&player).await.unwrap(), "Removal should hit the row");
    assert!(!connector.remove_stats(&player).await.unwrap(), "Second removal should miss");
    assert!(connector.find_stats(&player).await.unwrap().is_none());
}

#[tokio::test]
async fn test_database_count_stats() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    for identity in ["one@example.com", "two@example.com", "three@example.com"] {
        connector.create_stats(common::seeded_player_stats(identity)).await.unwrap();
    }

    assert_eq!(connector.count_stats().await.unwrap(), 3);
}

#[tokio::test]
async fn test_database_nickname_roundtrip() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);
    let connector = create_test_connector(config).await;

    let player = common::player_id("frank@example.com");

    assert!(connector.resolve_nickname(&player).await.unwrap().is_none());

    connector.set_nickname(&player, "First").await.unwrap();
    assert_eq!(connector.resolve_nickname(&player).await.unwrap().unwrap(), "First");

    // Upsert replaces the registration in place.
    connector.set_nickname(&player, "Second").await.unwrap();
    assert_eq!(connector.resolve_nickname(&player).await.unwrap().unwrap(), "Second");
    assert_eq!(connector.count_nicknames().await.unwrap(), 1);

    assert!(connector.remove_nickname(&player).await.unwrap());
    assert!(!connector.remove_nickname(&player).await.unwrap());
}

#[tokio::test]
async fn test_database_records_survive_reconnect() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);

    let connector = create_test_connector(config.clone()).await;
    let seeded = common::seeded_player_stats("grace@example.com");
    let player = seeded.identity.clone();
    connector.create_stats(seeded).await.unwrap();
    connector.set_nickname(&player, "Keeper").await.unwrap();
    drop(connector);

    let reopened = DatabaseConnector::new(config, false).await;
    let stored = reopened.find_stats(&player).await.unwrap().expect("Record should survive a reconnect");
    assert_eq!(stored.total_games, 10);
    assert_eq!(reopened.resolve_nickname(&player).await.unwrap().unwrap(), "Keeper");
}

#[tokio::test]
async fn test_database_through_game_tracker() {
    let temp_dir = common::create_temp_dir();
    let config = create_sqlite_test_config(&temp_dir);

    // Provision the schema up front so the tracker connects to ready tables.
    let pool = DatabaseConnectorSQLite::create(&config.database.path).await.unwrap();
    DatabaseConnectorSQLite::create_tables(&pool, config.clone()).await.unwrap();
    pool.close().await;

    let tracker = Arc::new(GameTracker::new(config, false).await);
    let player = common::player_id("heidi@example.com");

    tracker.create_player_stats(player.clone()).await.unwrap();
    tracker.set_player_nickname(&player, "Persistent").await.unwrap();
    tracker.record_game_outcome(&player, GameOutcome { won: true, attempts: 5 }).await.unwrap();

    let report = tracker.get_player_stats(&player).await.unwrap();
    assert_eq!(report.nickname, "Persistent");
    assert_eq!(report.total_games, 1);
    assert_eq!(report.wins_by_attempt, [0, 0, 0, 0, 1, 0]);

    tracker.load_players().await;
    assert_eq!(tracker.get_stats().players, 1, "Gauge should reflect the database count");
}
