//! Implementation blocks for common types.

/// Constructors and trait implementations for `CustomError`.
pub mod custom_error;
