//! Common data structures.

/// Custom error type with a plain string message.
pub mod custom_error;
