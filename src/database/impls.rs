//! Database connector implementations.

/// Engine selection and storage trait dispatch.
pub mod database_connector;

/// SQLite connector internals.
pub mod database_connector_sqlite;

/// MySQL/MariaDB connector internals.
pub mod database_connector_mysql;

/// PostgreSQL connector internals.
pub mod database_connector_pgsql;
