//! Service enumerations.

/// Errors returned by the tracker operations.
pub mod tracker_error;
