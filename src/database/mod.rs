//! Persistent storage engines for player statistics and nicknames.

pub mod enums;
pub mod helpers;
pub mod impls;
pub mod structs;
#[cfg(test)]
mod tests;
