use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_structure_config_players::DatabaseStructureConfigPlayers;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::helpers::{
    build_count_query, build_delete_query, build_insert_stats_query, build_record_outcome_query,
    build_select_nickname_query, build_select_stats_query, build_upsert_nickname_query,
    wins_column,
};
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::tracker::structs::game_outcome::{GameOutcome, MAX_ATTEMPTS};
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;
use chrono::Utc;
use log::{error, info};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{ConnectOptions, Error, Pool, Postgres, Row};
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

const ENGINE: DatabaseDrivers = DatabaseDrivers::pgsql;
const LOG_PREFIX: &str = "[PgSQL]";

impl DatabaseConnectorPgSQL {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Postgres>, Error> {
        let options = PgConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        PgPoolOptions::new().connect_with(options).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(
        config: Arc<Configuration>,
        create_database: bool,
    ) -> DatabaseConnector {
        let pgsql_connect =
            DatabaseConnectorPgSQL::create(config.database.clone().path.as_str()).await;
        if let Err(pgsql_connect) = pgsql_connect {
            error!(
                "{} Unable to connect to PgSQL on DSL {}",
                LOG_PREFIX,
                config.database.clone().path
            );
            error!(
                "{} Message: {:#?}",
                LOG_PREFIX,
                pgsql_connect.into_database_error().unwrap().message()
            );
            exit(1);
        }
        let mut structure = DatabaseConnector {
            mysql: None,
            sqlite: None,
            pgsql: None,
            engine: None,
            config: config.clone(),
        };
        structure.pgsql = Some(DatabaseConnectorPgSQL {
            pool: pgsql_connect.unwrap(),
        });
        structure.engine = Some(DatabaseDrivers::pgsql);
        if create_database {
            let pool = &structure.pgsql.clone().unwrap().pool;
            info!("[BOOT] Database creation triggered for PgSQL.");
            if let Err(e) = DatabaseConnectorPgSQL::create_tables(pool, config.clone()).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }
            info!("[BOOT] Created the database and tables, restart without the parameter to start the app.");
            sleep(Duration::from_secs(1)).await;
            exit(0);
        }
        structure
    }

    /// Creates the players and nicknames tables when they do not exist yet.
    pub async fn create_tables(
        pool: &Pool<Postgres>,
        config: Arc<Configuration>,
    ) -> Result<(), Error> {
        let ps = &config.database_structure.players;
        info!("[BOOT PgSQL] Creating table {}", ps.table_name);
        let mut columns = vec![
            format!("{} character varying(320) NOT NULL", ps.column_identity),
            format!("{} bigint NOT NULL DEFAULT 0", ps.column_total_games),
            format!("{} bigint NOT NULL DEFAULT 0", ps.column_games_won),
            format!("{} bigint NOT NULL DEFAULT 0", ps.column_games_lost),
        ];
        for attempt in 1..=MAX_ATTEMPTS {
            columns.push(format!(
                "{} bigint NOT NULL DEFAULT 0",
                wins_column(&ps.column_wins_prefix, attempt)
            ));
        }
        columns.push(format!("{} bigint NOT NULL DEFAULT 0", ps.column_updated));
        columns.push(format!(
            "CONSTRAINT {}_pkey PRIMARY KEY ({})",
            ps.table_name, ps.column_identity
        ));
        let query = format!(
            "CREATE TABLE IF NOT EXISTS public.{} ({}) TABLESPACE pg_default",
            ps.table_name,
            columns.join(", ")
        );
        sqlx::query(&query).execute(pool).await?;
        let ns = &config.database_structure.nicknames;
        info!("[BOOT PgSQL] Creating table {}", ns.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS public.{} ({} character varying(320) NOT NULL, {} character varying(255) NOT NULL, CONSTRAINT {}_pkey PRIMARY KEY ({})) TABLESPACE pg_default",
            ns.table_name, ns.column_identity, ns.column_nickname, ns.table_name, ns.column_identity
        );
        sqlx::query(&query).execute(pool).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create_stats(
        &self,
        config: Arc<Configuration>,
        stats: PlayerStats,
    ) -> Result<bool, Error> {
        let structure = &config.database_structure.players;
        let query = build_insert_stats_query(ENGINE, structure);
        let result = sqlx::query(&query)
            .bind(stats.identity.0.as_str())
            .bind(stats.total_games as i64)
            .bind(stats.games_won as i64)
            .bind(stats.games_lost as i64)
            .bind(stats.wins_by_attempt[0] as i64)
            .bind(stats.wins_by_attempt[1] as i64)
            .bind(stats.wins_by_attempt[2] as i64)
            .bind(stats.wins_by_attempt[3] as i64)
            .bind(stats.wins_by_attempt[4] as i64)
            .bind(stats.wins_by_attempt[5] as i64)
            .bind(stats.updated as i64)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn find_stats(
        &self,
        config: Arc<Configuration>,
        id: &PlayerId,
    ) -> Result<Option<PlayerStats>, Error> {
        let structure = &config.database_structure.players;
        let query = build_select_stats_query(ENGINE, structure);
        let row = sqlx::query(&query)
            .bind(id.0.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| row_to_stats(structure, &row)))
    }

    #[tracing::instrument(level = "debug")]
    pub async fn record_outcome(
        &self,
        config: Arc<Configuration>,
        id: &PlayerId,
        outcome: &GameOutcome,
    ) -> Result<Option<PlayerStats>, Error> {
        let query = build_record_outcome_query(ENGINE, &config.database_structure.players, outcome);
        let result = sqlx::query(&query)
            .bind(Utc::now().timestamp())
            .bind(id.0.as_str())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_stats(config, id).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn remove_stats(
        &self,
        config: Arc<Configuration>,
        id: &PlayerId,
    ) -> Result<bool, Error> {
        let structure = &config.database_structure.players;
        let query = build_delete_query(ENGINE, &structure.table_name, &structure.column_identity);
        let result = sqlx::query(&query)
            .bind(id.0.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn count_stats(&self, config: Arc<Configuration>) -> Result<u64, Error> {
        let query = build_count_query(ENGINE, &config.database_structure.players.table_name);
        let row = sqlx::query(&query).fetch_one(&self.pool).await?;
        Ok(row.get::<i64, usize>(0) as u64)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn resolve_nickname(
        &self,
        config: Arc<Configuration>,
        id: &PlayerId,
    ) -> Result<Option<String>, Error> {
        let structure = &config.database_structure.nicknames;
        let query = build_select_nickname_query(ENGINE, structure);
        let row = sqlx::query(&query)
            .bind(id.0.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| row.get::<String, &str>(structure.column_nickname.as_str())))
    }

    #[tracing::instrument(level = "debug")]
    pub async fn set_nickname(
        &self,
        config: Arc<Configuration>,
        id: &PlayerId,
        nickname: &str,
    ) -> Result<(), Error> {
        let query = build_upsert_nickname_query(ENGINE, &config.database_structure.nicknames);
        sqlx::query(&query)
            .bind(id.0.as_str())
            .bind(nickname)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn remove_nickname(
        &self,
        config: Arc<Configuration>,
        id: &PlayerId,
    ) -> Result<bool, Error> {
        let structure = &config.database_structure.nicknames;
        let query = build_delete_query(ENGINE, &structure.table_name, &structure.column_identity);
        let result = sqlx::query(&query)
            .bind(id.0.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn count_nicknames(&self, config: Arc<Configuration>) -> Result<u64, Error> {
        let query = build_count_query(ENGINE, &config.database_structure.nicknames.table_name);
        let row = sqlx::query(&query).fetch_one(&self.pool).await?;
        Ok(row.get::<i64, usize>(0) as u64)
    }
}

fn row_to_stats(structure: &DatabaseStructureConfigPlayers, row: &PgRow) -> PlayerStats {
    let mut wins_by_attempt = [0u64; MAX_ATTEMPTS];
    for (slot, bucket) in wins_by_attempt.iter_mut().enumerate() {
        let column = wins_column(&structure.column_wins_prefix, slot + 1);
        *bucket = row.get::<i64, &str>(column.as_str()) as u64;
    }
    PlayerStats {
        identity: PlayerId(row.get::<String, &str>(structure.column_identity.as_str())),
        total_games: row.get::<i64, &str>(structure.column_total_games.as_str()) as u64,
        games_won: row.get::<i64, &str>(structure.column_games_won.as_str()) as u64,
        games_lost: row.get::<i64, &str>(structure.column_games_lost.as_str()) as u64,
        wins_by_attempt,
        updated: row.get::<i64, &str>(structure.column_updated.as_str()) as u64,
    }
}
