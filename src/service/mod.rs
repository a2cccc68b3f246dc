//! Synchronization and rating services.
//!
//! - [`resolver`] maps teams to the league they play in
//! - [`rating`] scores fixtures
//! - [`sync`] holds the teams, standings, and matches jobs the scheduler drives

pub mod rating;
pub mod resolver;
pub mod sync;

#[cfg(test)]
mod tests;
