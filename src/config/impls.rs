//! Implementation blocks for configuration loading/saving.

/// Loading, saving, defaults and validation for `Configuration`.
pub mod configuration;

/// Display/Error implementations for `ConfigurationError`.
pub mod configuration_error;
