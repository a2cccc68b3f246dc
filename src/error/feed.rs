//! Upstream feed error types.
//!
//! These errors describe a failed exchange with the football-data.org feed. Every variant is
//! treated as transient by the sync jobs: the affected league or period is skipped for the
//! current run and retried on the next scheduled tick.

use thiserror::Error;

/// Error returned by a [`FeedClient`](crate::feed::FeedClient).
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request could not be sent or the body could not be read or decoded.
    #[error("Feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed answered with a non-success status code.
    ///
    /// # Fields
    /// - `status` - HTTP status code returned by the feed
    /// - `body` - Raw response body, useful for rate limit and permission messages
    #[error("Feed request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    /// The standings response did not contain any table rows for the competition.
    #[error("No standings found for league code: {0}")]
    EmptyStandings(String),
}
