mod common;

use guesstats_actix::tracker::enums::tracker_error::TrackerError;
use guesstats_actix::tracker::structs::game_outcome::GameOutcome;

#[tokio::test]
async fn test_create_player_starts_at_zero() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();

    let stats = tracker.create_player_stats(player.clone()).await.expect("Creation should succeed");

    assert_eq!(stats.identity, player);
    assert_eq!(stats.total_games, 0, "New player should have no games");
    assert_eq!(stats.games_won, 0);
    assert_eq!(stats.games_lost, 0);
    assert_eq!(stats.wins_by_attempt, [0, 0, 0, 0, 0, 0]);
    assert_eq!(tracker.count_player_stats().await.unwrap(), 1);
    assert_eq!(tracker.get_stats().players, 1, "Players gauge should follow creation");
}

#[tokio::test]
async fn test_create_duplicate_player_rejected() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();

    tracker.create_player_stats(player.clone()).await.unwrap();
    tracker.record_game_outcome(&player, GameOutcome { won: true, attempts: 2 }).await.unwrap();

    let result = tracker.create_player_stats(player.clone()).await;
    assert!(matches!(result, Err(TrackerError::AlreadyExists(_))), "Second creation should conflict");

    // The stored record survives the failed creation untouched.
    let stored = tracker.store.find_stats(&player).await.unwrap().unwrap();
    assert_eq!(stored.total_games, 1);
    assert_eq!(stored.wins_by_attempt[1], 1);
    assert_eq!(tracker.get_stats().players, 1, "Gauge should not move on conflict");
}

#[tokio::test]
async fn test_record_loss_updates_counters() {
    let tracker = common::create_test_tracker().await;
    let seeded = common::seeded_player_stats("carol@example.com");
    let player = seeded.identity.clone();
    tracker.store.create_stats(seeded).await.unwrap();

    let stats = tracker.record_game_outcome(&player, GameOutcome { won: false, attempts: 0 }).await.unwrap();

    assert_eq!(stats.total_games, 11);
    assert_eq!(stats.games_won, 6, "A loss should not move the win counter");
    assert_eq!(stats.games_lost, 5);
    assert_eq!(stats.wins_by_attempt, [1, 2, 1, 1, 0, 1], "A loss should not touch the attempt histogram");
    assert!(stats.is_consistent());
}

#[tokio::test]
async fn test_record_win_updates_attempt_bucket() {
    let tracker = common::create_test_tracker().await;
    let seeded = common::seeded_player_stats("dave@example.com");
    let player = seeded.identity.clone();
    tracker.store.create_stats(seeded).await.unwrap();

    let stats = tracker.record_game_outcome(&player, GameOutcome { won: true, attempts: 3 }).await.unwrap();

    assert_eq!(stats.total_games, 11);
    assert_eq!(stats.games_won, 7);
    assert_eq!(stats.games_lost, 4, "A win should not move the loss counter");
    assert_eq!(stats.wins_by_attempt, [1, 2, 2, 1, 0, 1], "Only the third attempt bucket should grow");
    assert!(stats.is_consistent());
}

#[tokio::test]
async fn test_win_attempts_out_of_range_rejected() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();
    tracker.create_player_stats(player.clone()).await.unwrap();

    for attempts in [0, 7, 255] {
        let result = tracker.record_game_outcome(&player, GameOutcome { won: true, attempts }).await;
        assert!(matches!(result, Err(TrackerError::AttemptsOutOfRange(_))), "Attempt {attempts} should be rejected");
    }

    // Nothing was written and no event counters moved.
    let stored = tracker.store.find_stats(&player).await.unwrap().unwrap();
    assert_eq!(stored.total_games, 0);
    assert_eq!(tracker.get_stats().games_recorded, 0);
}

#[tokio::test]
async fn test_loss_ignores_attempts_value() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();
    tracker.create_player_stats(player.clone()).await.unwrap();

    let stats = tracker.record_game_outcome(&player, GameOutcome { won: false, attempts: 200 }).await.unwrap();

    assert_eq!(stats.total_games, 1);
    assert_eq!(stats.games_lost, 1);
    assert_eq!(stats.wins_by_attempt, [0, 0, 0, 0, 0, 0]);
}

#[tokio::test]
async fn test_record_outcome_unknown_player() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();

    let result = tracker.record_game_outcome(&player, GameOutcome { won: true, attempts: 1 }).await;

    assert!(matches!(result, Err(TrackerError::StatsNotFound(_))), "No record should be created implicitly");
    assert_eq!(tracker.count_player_stats().await.unwrap(), 0);
    assert_eq!(tracker.get_stats().games_recorded, 0);
}

#[tokio::test]
async fn test_get_player_stats_requires_nickname() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();
    tracker.create_player_stats(player.clone()).await.unwrap();

    let result = tracker.get_player_stats(&player).await;
    assert!(matches!(result, Err(TrackerError::NicknameNotFound(_))), "Report needs a registered nickname");

    tracker.set_player_nickname(&player, "WordSmith").await.unwrap();

    let report = tracker.get_player_stats(&player).await.unwrap();
    assert_eq!(report.identity, player);
    assert_eq!(report.nickname, "WordSmith");
    assert_eq!(report.total_games, 0);
}

#[tokio::test]
async fn test_get_player_stats_unknown_player() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();

    let result = tracker.get_player_stats(&player).await;

    assert!(matches!(result, Err(TrackerError::StatsNotFound(_))));
}

#[tokio::test]
async fn test_identities_match_exactly() {
    let tracker = common::create_test_tracker().await;
    let upper = common::player_id("Alice@example.com");
    let lower = common::player_id("alice@example.com");

    tracker.create_player_stats(upper.clone()).await.unwrap();

    let result = tracker.record_game_outcome(&lower, GameOutcome { won: true, attempts: 1 }).await;
    assert!(matches!(result, Err(TrackerError::StatsNotFound(_))), "Identities should never be case folded");

    tracker.create_player_stats(lower.clone()).await.unwrap();
    assert_eq!(tracker.count_player_stats().await.unwrap(), 2, "Differently cased identities are two players");
}

#[tokio::test]
async fn test_remove_player_stats() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();
    tracker.create_player_stats(player.clone()).await.unwrap();

    tracker.remove_player_stats(&player).await.expect("Removal should succeed");
    assert_eq!(tracker.get_stats().players, 0, "Players gauge should follow removal");

    let result = tracker.remove_player_stats(&player).await;
    assert!(matches!(result, Err(TrackerError::StatsNotFound(_))), "Second removal should fail");
}

#[tokio::test]
async fn test_nickname_set_update_remove() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();

    let vacant = tracker.set_player_nickname(&player, "First").await.unwrap();
    assert!(vacant, "First registration should report a vacant slot");
    assert_eq!(tracker.get_stats().nicknames, 1);

    let vacant = tracker.set_player_nickname(&player, "Second").await.unwrap();
    assert!(!vacant, "Replacement should not report a vacant slot");
    assert_eq!(tracker.get_stats().nicknames, 1, "Replacement should not grow the gauge");

    assert_eq!(tracker.get_player_nickname(&player).await.unwrap(), "Second");

    tracker.remove_player_nickname(&player).await.unwrap();
    assert_eq!(tracker.get_stats().nicknames, 0);

    let result = tracker.remove_player_nickname(&player).await;
    assert!(matches!(result, Err(TrackerError::NicknameNotFound(_))));
}

#[tokio::test]
async fn test_event_counters_follow_outcomes() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();
    tracker.create_player_stats(player.clone()).await.unwrap();

    tracker.record_game_outcome(&player, GameOutcome { won: true, attempts: 1 }).await.unwrap();
    tracker.record_game_outcome(&player, GameOutcome { won: true, attempts: 6 }).await.unwrap();
    tracker.record_game_outcome(&player, GameOutcome { won: false, attempts: 0 }).await.unwrap();

    let stats = tracker.get_stats();
    assert_eq!(stats.games_recorded, 3);
    assert_eq!(stats.wins_recorded, 2);
    assert_eq!(stats.losses_recorded, 1);
}

#[tokio::test]
async fn test_concurrent_outcomes_accumulate() {
    let tracker = common::create_test_tracker().await;
    let player = common::random_player_id();
    tracker.create_player_stats(player.clone()).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let tracker_clone = tracker.clone();
        let player_clone = player.clone();
        handles.push(tokio::spawn(async move {
            let outcome = if i % 2 == 0 {
                GameOutcome { won: true, attempts: (i % 6 + 1) as u8 }
            } else {
                GameOutcome { won: false, attempts: 0 }
            };
            tracker_clone.record_game_outcome(&player_clone, outcome).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.expect("Recording task should not panic");
    }

    let stored = tracker.store.find_stats(&player).await.unwrap().unwrap();
    assert_eq!(stored.total_games, 20, "No update should be lost under concurrency");
    assert_eq!(stored.games_won, 10);
    assert_eq!(stored.games_lost, 10);
    assert!(stored.is_consistent());
    assert_eq!(tracker.get_stats().games_recorded, 20);
}
