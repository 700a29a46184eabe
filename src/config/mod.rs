//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Core service settings (API key, Prometheus id)
//! - **database**: Database connection and schema settings
//! - **database_structure**: Customizable table/column names
//! - **api_server**: REST API server instances
//! - **sentry_config**: Error reporting configuration
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Customizable database table/column names
//! - Multiple API server instance configurations
//! - Default value generation
//!
//! # Example
//!
//! ```rust,ignore
//! use guesstats_actix::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked.
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration enumerations (error types).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
