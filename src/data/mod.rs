//! Entity store repositories.
//!
//! Each repository wraps a borrowed connection, so the same code runs against the shared
//! [`DatabaseConnection`](sea_orm::DatabaseConnection) or inside a transaction when a job
//! needs a full replace to be atomic.

pub mod football_match;
pub mod standing;
pub mod team;

#[cfg(test)]
mod tests;
