//! Real-time statistics tracking and monitoring module.
//!
//! This module provides atomic counters for tracking all service activity,
//! enabling real-time monitoring and Prometheus metrics export.
//!
//! # Statistics Categories
//!
//! ## Core Metrics
//! - Player record and nickname counts
//! - Recorded games, wins and losses
//!
//! ## Protocol Metrics
//! - TCP IPv4/IPv6 connections and API requests
//! - Error and not-found counts
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from multiple worker threads without locking overhead.
//!
//! # Monitoring Integration
//!
//! - JSON format via `/api/stats` endpoint
//! - Prometheus format via `/api/metrics` endpoint

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
