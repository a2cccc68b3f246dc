//! Error types for the matchday service.
//!
//! This module provides the unified [`Error`] type along with specialized error types for
//! configuration and upstream feed failures. All errors use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod feed;

use thiserror::Error;

use crate::error::{config::ConfigError, feed::FeedError};

/// Main error type for the matchday service.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Feed errors (football-data.org requests, unexpected responses)
/// - External library errors (database, cache, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Upstream feed error (request failure, bad status, malformed body).
    #[error(transparent)]
    FeedError(#[from] FeedError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in matchday's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Valkey/Redis cache error (connection, script execution).
    #[error(transparent)]
    CacheError(#[from] fred::error::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
