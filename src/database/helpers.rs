//! Query text builders shared by the storage engines.
//!
//! Table and column names come from the validated configuration and are
//! interpolated directly; every player-supplied value (identity, nickname,
//! counters) travels through a bound placeholder instead.

use crate::config::structs::database_structure_config_nicknames::DatabaseStructureConfigNicknames;
use crate::config::structs::database_structure_config_players::DatabaseStructureConfigPlayers;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::tracker::structs::game_outcome::{GameOutcome, MAX_ATTEMPTS};

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => identifier.to_string(),
    }
}

/// Positional placeholder for a bound value, 1-based. SQLite and MySQL use
/// anonymous markers so the position only matters for PgSQL.
pub fn bind_marker(engine: DatabaseDrivers, position: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?".to_string(),
        DatabaseDrivers::pgsql => format!("${}", position),
    }
}

pub fn insert_ignore_prefix(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "INSERT OR IGNORE INTO",
        DatabaseDrivers::mysql => "INSERT IGNORE INTO",
        DatabaseDrivers::pgsql => "INSERT INTO",
    }
}

pub fn insert_ignore_suffix(engine: DatabaseDrivers, key_column: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::new(),
        DatabaseDrivers::pgsql => format!(" ON CONFLICT ({}) DO NOTHING", key_column),
    }
}

pub fn upsert_conflict_clause(
    engine: DatabaseDrivers,
    key_column: &str,
    update_columns: &[&str],
) -> String {
    match engine {
        DatabaseDrivers::sqlite3 => {
            let sets: Vec<String> = update_columns
                .iter()
                .map(|col| format!("`{}`=excluded.`{}`", col, col))
                .collect();
            format!("ON CONFLICT (`{}`) DO UPDATE SET {}", key_column, sets.join(", "))
        }
        DatabaseDrivers::mysql => {
            let sets: Vec<String> = update_columns
                .iter()
                .map(|col| format!("`{}`=VALUES(`{}`)", col, col))
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", sets.join(", "))
        }
        DatabaseDrivers::pgsql => {
            let sets: Vec<String> = update_columns
                .iter()
                .map(|col| format!("{}=excluded.{}", col, col))
                .collect();
            format!("ON CONFLICT ({}) DO UPDATE SET {}", key_column, sets.join(", "))
        }
    }
}

/// Name of the win bucket column for a 1-based attempt number.
pub fn wins_column(prefix: &str, attempt: usize) -> String {
    format!("{}{}", prefix, attempt)
}

/// Column order shared by the insert and select builders: identity, the
/// three counters, the six win buckets, then the updated timestamp.
pub fn stats_columns(structure: &DatabaseStructureConfigPlayers) -> Vec<String> {
    let mut columns = vec![
        structure.column_identity.clone(),
        structure.column_total_games.clone(),
        structure.column_games_won.clone(),
        structure.column_games_lost.clone(),
    ];
    for attempt in 1..=MAX_ATTEMPTS {
        columns.push(wins_column(&structure.column_wins_prefix, attempt));
    }
    columns.push(structure.column_updated.clone());
    columns
}

pub fn build_insert_stats_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfigPlayers,
) -> String {
    let quoted_table = quote_identifier(engine, &structure.table_name);
    let columns = stats_columns(structure);
    let quoted_columns: Vec<String> = columns
        .iter()
        .map(|col| quote_identifier(engine, col))
        .collect();
    let markers: Vec<String> = (1..=columns.len())
        .map(|position| bind_marker(engine, position))
        .collect();
    format!(
        "{} {} ({}) VALUES ({}){}",
        insert_ignore_prefix(engine),
        quoted_table,
        quoted_columns.join(", "),
        markers.join(", "),
        insert_ignore_suffix(engine, &structure.column_identity)
    )
}

pub fn build_select_stats_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfigPlayers,
) -> String {
    let columns = stats_columns(structure);
    let quoted_columns: Vec<String> = columns
        .iter()
        .map(|col| quote_identifier(engine, col))
        .collect();
    format!(
        "SELECT {} FROM {} WHERE {}={}",
        quoted_columns.join(", "),
        quote_identifier(engine, &structure.table_name),
        quote_identifier(engine, &structure.column_identity),
        bind_marker(engine, 1)
    )
}

/// Single self-referential UPDATE that applies one outcome in place. The
/// returned text takes two bound values: the updated timestamp, then the
/// identity. Zero affected rows means no record exists for the identity.
pub fn build_record_outcome_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfigPlayers,
    outcome: &GameOutcome,
) -> String {
    let mut sets = vec![increment(engine, &structure.column_total_games)];
    if outcome.won {
        sets.push(increment(engine, &structure.column_games_won));
        sets.push(increment(
            engine,
            &wins_column(&structure.column_wins_prefix, outcome.attempts as usize),
        ));
    } else {
        sets.push(increment(engine, &structure.column_games_lost));
    }
    sets.push(format!(
        "{}={}",
        quote_identifier(engine, &structure.column_updated),
        bind_marker(engine, 1)
    ));
    format!(
        "UPDATE {} SET {} WHERE {}={}",
        quote_identifier(engine, &structure.table_name),
        sets.join(", "),
        quote_identifier(engine, &structure.column_identity),
        bind_marker(engine, 2)
    )
}

pub fn build_delete_query(engine: DatabaseDrivers, table_name: &str, key_column: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {}={}",
        quote_identifier(engine, table_name),
        quote_identifier(engine, key_column),
        bind_marker(engine, 1)
    )
}

pub fn build_count_query(engine: DatabaseDrivers, table_name: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", quote_identifier(engine, table_name))
}

pub fn build_select_nickname_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfigNicknames,
) -> String {
    format!(
        "SELECT {} FROM {} WHERE {}={}",
        quote_identifier(engine, &structure.column_nickname),
        quote_identifier(engine, &structure.table_name),
        quote_identifier(engine, &structure.column_identity),
        bind_marker(engine, 1)
    )
}

pub fn build_upsert_nickname_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfigNicknames,
) -> String {
    let conflict = upsert_conflict_clause(
        engine,
        &structure.column_identity,
        &[&structure.column_nickname],
    );
    format!(
        "INSERT INTO {} ({}, {}) VALUES ({}, {}) {}",
        quote_identifier(engine, &structure.table_name),
        quote_identifier(engine, &structure.column_identity),
        quote_identifier(engine, &structure.column_nickname),
        bind_marker(engine, 1),
        bind_marker(engine, 2),
        conflict
    )
}

pub fn engine_name(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "SQLite",
        DatabaseDrivers::mysql => "MySQL",
        DatabaseDrivers::pgsql => "PgSQL",
    }
}

fn increment(engine: DatabaseDrivers, column: &str) -> String {
    let quoted = quote_identifier(engine, column);
    format!("{}={}+1", quoted, quoted)
}
