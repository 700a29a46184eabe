//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// API server configuration (address, SSL, timeouts).
pub mod api_server_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database schema customization settings.
pub mod database_structure_config;

/// Players table/column name customization.
pub mod database_structure_config_players;

/// Nicknames table/column name customization.
pub mod database_structure_config_nicknames;

/// Database connection configuration.
pub mod database_config;

/// Core service settings (API key, Prometheus id).
pub mod tracker_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
