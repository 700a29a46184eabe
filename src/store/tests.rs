#[cfg(test)]
mod memory_store_tests {
    use std::str::FromStr;
    use std::sync::Arc;
    use crate::store::structs::memory_store::MemoryStore;
    use crate::store::traits::nickname_resolver::NicknameResolver;
    use crate::store::traits::stats_store::StatsStore;
    use crate::tracker::structs::game_outcome::GameOutcome;
    use crate::tracker::structs::player_id::PlayerId;
    use crate::tracker::structs::player_stats::PlayerStats;

    fn player(id: &str) -> PlayerId {
        PlayerId::from_str(id).expect("Test identity should parse")
    }

    #[tokio::test]
    async fn test_create_stats_reports_duplicates() {
        let store = MemoryStore::new();
        let id = player("alice@example.com");

        let created = store.create_stats(PlayerStats::new(id.clone())).await.unwrap();
        let duplicate = store.create_stats(PlayerStats::new(id.clone())).await.unwrap();

        assert!(created, "First creation should succeed");
        assert!(!duplicate, "Second creation should report an existing record");
        assert_eq!(store.count_stats().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_stats_returns_none_for_unknown_identity() {
        let store = MemoryStore::new();

        let found = store.find_stats(&player("ghost@example.com")).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_record_outcome_applies_update_in_place() {
        let store = MemoryStore::new();
        let id = player("bob@example.com");
        store.create_stats(PlayerStats::new(id.clone())).await.unwrap();

        let updated = store.record_outcome(&id, &GameOutcome { won: true, attempts: 4 }).await.unwrap()
            .expect("Record should exist");

        assert_eq!(updated.total_games, 1);
        assert_eq!(updated.games_won, 1);
        assert_eq!(updated.wins_by_attempt, [0, 0, 0, 1, 0, 0]);
    }

    #[tokio::test]
    async fn test_record_outcome_without_record_writes_nothing() {
        let store = MemoryStore::new();

        let updated = store.record_outcome(&player("ghost@example.com"), &GameOutcome { won: false, attempts: 0 }).await.unwrap();

        assert!(updated.is_none());
        assert_eq!(store.count_stats().await.unwrap(), 0, "Missing records must not be created on update");
    }

    #[tokio::test]
    async fn test_remove_stats_distinguishes_absent_records() {
        let store = MemoryStore::new();
        let id = player("carol@example.com");
        store.create_stats(PlayerStats::new(id.clone())).await.unwrap();

        assert!(store.remove_stats(&id).await.unwrap());
        assert!(!store.remove_stats(&id).await.unwrap(), "Second removal should find nothing");
    }

    #[tokio::test]
    async fn test_nickname_registry_roundtrip() {
        let store = MemoryStore::new();
        let id = player("dave@example.com");

        assert!(store.resolve_nickname(&id).await.unwrap().is_none());

        store.set_nickname(&id, "WordWizard").await.unwrap();
        assert_eq!(store.resolve_nickname(&id).await.unwrap().as_deref(), Some("WordWizard"));

        store.set_nickname(&id, "LexiconLord").await.unwrap();
        assert_eq!(store.resolve_nickname(&id).await.unwrap().as_deref(), Some("LexiconLord"), "Second registration should replace");

        assert!(store.remove_nickname(&id).await.unwrap());
        assert_eq!(store.count_nicknames().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_outcomes_all_land() {
        let store = Arc::new(MemoryStore::new());
        let id = player("eve@example.com");
        store.create_stats(PlayerStats::new(id.clone())).await.unwrap();

        let mut handles = Vec::new();
        for run in 0..50 {
            let store_clone = store.clone();
            let id_clone = id.clone();
            handles.push(tokio::spawn(async move {
                let outcome = if run % 2 == 0 {
                    GameOutcome { won: true, attempts: 3 }
                } else {
                    GameOutcome { won: false, attempts: 6 }
                };
                store_clone.record_outcome(&id_clone, &outcome).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.expect("Outcome task should not panic");
        }

        let stats = store.find_stats(&id).await.unwrap().expect("Record should exist");
        assert_eq!(stats.total_games, 50, "No update may be lost under concurrency");
        assert_eq!(stats.games_won, 25);
        assert_eq!(stats.games_lost, 25);
        assert_eq!(stats.wins_by_attempt[2], 25);
    }
}
