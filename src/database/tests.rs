#[cfg(test)]
mod database_tests {
    use crate::config::structs::database_structure_config_nicknames::DatabaseStructureConfigNicknames;
    use crate::config::structs::database_structure_config_players::DatabaseStructureConfigPlayers;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::database::helpers;
    use crate::tracker::structs::game_outcome::GameOutcome;

    fn players_structure() -> DatabaseStructureConfigPlayers {
        DatabaseStructureConfigPlayers {
            table_name: String::from("players"),
            column_identity: String::from("identity"),
            column_total_games: String::from("total_games"),
            column_games_won: String::from("games_won"),
            column_games_lost: String::from("games_lost"),
            column_wins_prefix: String::from("won_in_"),
            column_updated: String::from("updated"),
        }
    }

    fn nicknames_structure() -> DatabaseStructureConfigNicknames {
        DatabaseStructureConfigNicknames {
            table_name: String::from("nicknames"),
            column_identity: String::from("identity"),
            column_nickname: String::from("nickname"),
        }
    }

    mod helpers_tests {
        use super::*;

        #[test]
        fn test_quote_identifier() {
            assert_eq!(helpers::quote_identifier(DatabaseDrivers::sqlite3, "players"), "`players`");
            assert_eq!(helpers::quote_identifier(DatabaseDrivers::mysql, "players"), "`players`");
            assert_eq!(helpers::quote_identifier(DatabaseDrivers::pgsql, "players"), "players");
        }

        #[test]
        fn test_bind_marker() {
            assert_eq!(helpers::bind_marker(DatabaseDrivers::sqlite3, 4), "?");
            assert_eq!(helpers::bind_marker(DatabaseDrivers::mysql, 4), "?");
            assert_eq!(helpers::bind_marker(DatabaseDrivers::pgsql, 4), "$4");
        }

        #[test]
        fn test_upsert_conflict_clause() {
            let columns = &["nickname"];
            assert_eq!(
                helpers::upsert_conflict_clause(DatabaseDrivers::sqlite3, "identity", columns),
                "ON CONFLICT (`identity`) DO UPDATE SET `nickname`=excluded.`nickname`"
            );
            assert_eq!(
                helpers::upsert_conflict_clause(DatabaseDrivers::mysql, "identity", columns),
                "ON DUPLICATE KEY UPDATE `nickname`=VALUES(`nickname`)"
            );
            assert_eq!(
                helpers::upsert_conflict_clause(DatabaseDrivers::pgsql, "identity", columns),
                "ON CONFLICT (identity) DO UPDATE SET nickname=excluded.nickname"
            );
        }

        #[test]
        fn test_wins_column() {
            assert_eq!(helpers::wins_column("won_in_", 1), "won_in_1");
            assert_eq!(helpers::wins_column("won_in_", 6), "won_in_6");
        }

        #[test]
        fn test_build_insert_stats_query() {
            let structure = players_structure();
            assert_eq!(
                helpers::build_insert_stats_query(DatabaseDrivers::sqlite3, &structure),
                "INSERT OR IGNORE INTO `players` (`identity`, `total_games`, `games_won`, `games_lost`, `won_in_1`, `won_in_2`, `won_in_3`, `won_in_4`, `won_in_5`, `won_in_6`, `updated`) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
            );
            assert_eq!(
                helpers::build_insert_stats_query(DatabaseDrivers::mysql, &structure),
                "INSERT IGNORE INTO `players` (`identity`, `total_games`, `games_won`, `games_lost`, `won_in_1`, `won_in_2`, `won_in_3`, `won_in_4`, `won_in_5`, `won_in_6`, `updated`) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
            );
            assert_eq!(
                helpers::build_insert_stats_query(DatabaseDrivers::pgsql, &structure),
                "INSERT INTO players (identity, total_games, games_won, games_lost, won_in_1, won_in_2, won_in_3, won_in_4, won_in_5, won_in_6, updated) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) ON CONFLICT (identity) DO NOTHING"
            );
        }

        #[test]
        fn test_build_select_stats_query() {
            let structure = players_structure();
            assert_eq!(
                helpers::build_select_stats_query(DatabaseDrivers::sqlite3, &structure),
                "SELECT `identity`, `total_games`, `games_won`, `games_lost`, `won_in_1`, `won_in_2`, `won_in_3`, `won_in_4`, `won_in_5`, `won_in_6`, `updated` FROM `players` WHERE `identity`=?"
            );
            assert_eq!(
                helpers::build_select_stats_query(DatabaseDrivers::pgsql, &structure),
                "SELECT identity, total_games, games_won, games_lost, won_in_1, won_in_2, won_in_3, won_in_4, won_in_5, won_in_6, updated FROM players WHERE identity=$1"
            );
        }

        #[test]
        fn test_build_record_outcome_query_win() {
            let structure = players_structure();
            let outcome = GameOutcome { won: true, attempts: 3 };
            assert_eq!(
                helpers::build_record_outcome_query(DatabaseDrivers::sqlite3, &structure, &outcome),
                "UPDATE `players` SET `total_games`=`total_games`+1, `games_won`=`games_won`+1, `won_in_3`=`won_in_3`+1, `updated`=? WHERE `identity`=?"
            );
            assert_eq!(
                helpers::build_record_outcome_query(DatabaseDrivers::pgsql, &structure, &outcome),
                "UPDATE players SET total_games=total_games+1, games_won=games_won+1, won_in_3=won_in_3+1, updated=$1 WHERE identity=$2"
            );
        }

        #[test]
        fn test_build_record_outcome_query_loss() {
            let structure = players_structure();
            let outcome = GameOutcome { won: false, attempts: 0 };
            assert_eq!(
                helpers::build_record_outcome_query(DatabaseDrivers::mysql, &structure, &outcome),
                "UPDATE `players` SET `total_games`=`total_games`+1, `games_lost`=`games_lost`+1, `updated`=? WHERE `identity`=?"
            );
            assert_eq!(
                helpers::build_record_outcome_query(DatabaseDrivers::pgsql, &structure, &outcome),
                "UPDATE players SET total_games=total_games+1, games_lost=games_lost+1, updated=$1 WHERE identity=$2"
            );
        }

        #[test]
        fn test_build_delete_query() {
            assert_eq!(
                helpers::build_delete_query(DatabaseDrivers::sqlite3, "players", "identity"),
                "DELETE FROM `players` WHERE `identity`=?"
            );
            assert_eq!(
                helpers::build_delete_query(DatabaseDrivers::pgsql, "players", "identity"),
                "DELETE FROM players WHERE identity=$1"
            );
        }

        #[test]
        fn test_build_count_query() {
            assert_eq!(
                helpers::build_count_query(DatabaseDrivers::mysql, "nicknames"),
                "SELECT COUNT(*) FROM `nicknames`"
            );
            assert_eq!(
                helpers::build_count_query(DatabaseDrivers::pgsql, "nicknames"),
                "SELECT COUNT(*) FROM nicknames"
            );
        }

        #[test]
        fn test_build_select_nickname_query() {
            let structure = nicknames_structure();
            assert_eq!(
                helpers::build_select_nickname_query(DatabaseDrivers::sqlite3, &structure),
                "SELECT `nickname` FROM `nicknames` WHERE `identity`=?"
            );
            assert_eq!(
                helpers::build_select_nickname_query(DatabaseDrivers::pgsql, &structure),
                "SELECT nickname FROM nicknames WHERE identity=$1"
            );
        }

        #[test]
        fn test_build_upsert_nickname_query() {
            let structure = nicknames_structure();
            assert_eq!(
                helpers::build_upsert_nickname_query(DatabaseDrivers::sqlite3, &structure),
                "INSERT INTO `nicknames` (`identity`, `nickname`) VALUES (?, ?) ON CONFLICT (`identity`) DO UPDATE SET `nickname`=excluded.`nickname`"
            );
            assert_eq!(
                helpers::build_upsert_nickname_query(DatabaseDrivers::mysql, &structure),
                "INSERT INTO `nicknames` (`identity`, `nickname`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `nickname`=VALUES(`nickname`)"
            );
            assert_eq!(
                helpers::build_upsert_nickname_query(DatabaseDrivers::pgsql, &structure),
                "INSERT INTO nicknames (identity, nickname) VALUES ($1, $2) ON CONFLICT (identity) DO UPDATE SET nickname=excluded.nickname"
            );
        }

        #[test]
        fn test_engine_name() {
            assert_eq!(helpers::engine_name(DatabaseDrivers::sqlite3), "SQLite");
            assert_eq!(helpers::engine_name(DatabaseDrivers::mysql), "MySQL");
            assert_eq!(helpers::engine_name(DatabaseDrivers::pgsql), "PgSQL");
        }
    }
}
