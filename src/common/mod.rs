//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the service codebase.
//!
//! # Utilities
//!
//! - Logging setup
//! - Bind address sanity checks
//! - Timestamp utilities
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
