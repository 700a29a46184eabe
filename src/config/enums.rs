//! Configuration enumerations.

/// Errors raised while loading or parsing the configuration file.
pub mod configuration_error;
