//! # Guesstats-Actix Word Game Statistics Tracker
//!
//! A per-player outcome statistics service for six-attempt word guessing games,
//! built with Rust and the Actix-web framework.
//!
//! ## Overview
//!
//! Guesstats-Actix keeps lifetime win/loss counters for every registered player,
//! including a per-attempt histogram of winning games (attempt 1 through 6).
//! Counters live in memory or in one of several database backends (SQLite,
//! MySQL, PostgreSQL), and are exposed through a token-protected REST API.
//!
//! ## Features
//!
//! - **Exact Identities**: players are keyed by e-mail-shaped identities, matched byte for byte
//! - **Database Agnostic**: SQLite, MySQL, and PostgreSQL support with customizable schemas
//! - **Atomic Updates**: game outcomes are folded into the counters in a single storage operation
//! - **Nickname Registry**: a display name per player, resolved into every stats report
//! - **Batch Recording**: many finished games can be submitted in one request
//! - **SSL/TLS**: rustls-backed HTTPS endpoints with self-signed certificate generation
//! - **Monitoring**: real-time statistics, Prometheus metrics, and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use guesstats_actix::config::structs::configuration::Configuration;
//! use guesstats_actix::tracker::structs::game_tracker::GameTracker;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(false)?;
//!
//! // Create tracker instance
//! let tracker = GameTracker::new(config.clone(), false).await;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API endpoints for player statistics and monitoring
//! - [`common`] - Shared utilities, error handling, and helper functions
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Multi-database backend support (SQLite, MySQL, PostgreSQL)
//! - [`stats`] - Real-time statistics tracking and monitoring
//! - [`store`] - Storage capability traits and the in-memory store
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Core tracker logic, player counters, and nickname handling

/// REST API module for player statistics and monitoring.
///
/// Provides HTTP endpoints for creating players, recording game outcomes,
/// managing nicknames, and retrieving tracker statistics. Includes a
/// Prometheus metrics endpoint.
pub mod api;

/// Common utilities and shared functionality.
///
/// Contains helper functions for port probing, logging setup, timestamps,
/// and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Supports customizable database schemas and multi-server configurations.
pub mod config;

/// Database backend module with multi-database support.
///
/// Provides a unified interface for SQLite, MySQL, and PostgreSQL backends
/// with support for custom table and column names. Includes query builders
/// and connection pooling.
pub mod database;

/// Statistics tracking and monitoring module.
///
/// Collects real-time metrics on tracker activity including player counts,
/// recorded outcomes, and per-protocol request counters. Supports Prometheus
/// metrics export.
pub mod stats;

/// Storage capability traits and the in-memory store.
///
/// Defines the [`store::traits::stats_store::StatsStore`] and
/// [`store::traits::nickname_resolver::NicknameResolver`] seams the tracker
/// is built against, plus a map-backed implementation for ephemeral setups.
pub mod store;

/// CLI argument parsing.
///
/// Defines command-line interface options for the tracker binary including
/// configuration generation, database setup, and certificate generation.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the main tracker implementation including player counter
/// handling, outcome recording, nickname resolution, and report composition.
pub mod tracker;
