#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::tracker::structs::game_tracker::GameTracker;

    async fn tracker() -> Arc<GameTracker> {
        let mut config = Configuration::init();
        config.database.persistent = false;
        Arc::new(GameTracker::new(Arc::new(config), false).await)
    }

    #[tokio::test]
    async fn test_stats_start_at_zero() {
        let tracker = tracker().await;
        let stats = tracker.get_stats();

        assert_eq!(stats.players, 0);
        assert_eq!(stats.games_recorded, 0);
        assert!(stats.started > 0, "Boot timestamp should be recorded");
    }

    #[tokio::test]
    async fn test_update_stats_applies_signed_deltas() {
        let tracker = tracker().await;

        tracker.update_stats(StatsEvent::Players, 5);
        tracker.update_stats(StatsEvent::Players, -2);
        let stats = tracker.get_stats();

        assert_eq!(stats.players, 3, "Positive and negative deltas should both land");
    }

    #[tokio::test]
    async fn test_set_stats_overwrites_counter() {
        let tracker = tracker().await;

        tracker.update_stats(StatsEvent::Nicknames, 7);
        let stats = tracker.set_stats(StatsEvent::Nicknames, 42);

        assert_eq!(stats.nicknames, 42);
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let tracker = tracker().await;

        let mut handles = Vec::new();
        for _ in 0..100 {
            let tracker_clone = tracker.clone();
            handles.push(tokio::spawn(async move {
                tracker_clone.update_stats(StatsEvent::GamesRecorded, 1);
            }));
        }
        for handle in handles {
            handle.await.expect("Stats update task should not panic");
        }

        assert_eq!(tracker.get_stats().games_recorded, 100);
    }
}
