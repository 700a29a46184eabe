//! Core service logic module.
//!
//! Contains the main tracker implementation: the per-player statistics
//! model, the outcome update rule, aggregate reads composing nicknames,
//! and the administrative registry operations.

/// Service enumerations (errors).
pub mod enums;

/// Implementation blocks for the tracker and its data types.
pub mod impls;

/// Core data structures.
pub mod structs;
