//! REST API module for statistics management and monitoring.
//!
//! This module provides HTTP endpoints for managing player outcome
//! statistics and nickname registrations, and for reading the service
//! counters.
//!
//! # Endpoints Overview
//!
//! ## Statistics
//! - `GET /api/stats` - Get service statistics in JSON format
//! - `GET /api/metrics` - Get Prometheus-format metrics
//!
//! ## Players
//! - `GET /api/player/{id}` - Get one player's statistics with nickname
//! - `POST /api/player/{id}` - Create a zeroed statistics record
//! - `DELETE /api/player/{id}` - Delete a statistics record
//! - `POST /api/player/{id}/game` - Record one finished game
//! - `POST /api/players/games` - Batch record finished games
//!
//! ## Nicknames
//! - `GET /api/nickname/{id}` - Get the nickname registered for an identity
//! - `POST /api/nickname/{id}/{nickname}` - Register or replace a nickname
//! - `DELETE /api/nickname/{id}` - Remove a nickname registration
//!
//! # Authentication
//!
//! All API endpoints require a valid API token passed as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Player statistics endpoints.
pub mod api_players;

/// Nickname registry endpoints.
pub mod api_nicknames;

/// Statistics and monitoring endpoints.
pub mod api_stats;
