//! Environment-driven service configuration.

use std::time::Duration;

use crate::{error::config::ConfigError, scheduler::config as schedule_config};

/// Default football-data.org API location.
pub const DEFAULT_FOOTBALL_DATA_URL: &str = "https://api.football-data.org";

/// Number of days ahead of today the matches job requests fixtures for.
const DEFAULT_MATCHES_WINDOW_DAYS: i64 = 7;

/// Largest accepted match window.
const MAX_MATCHES_WINDOW_DAYS: i64 = 365;

/// Deadline applied to a single job run.
const DEFAULT_JOB_TIMEOUT_SECS: u64 = 600;

/// Runtime settings loaded from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub football_data_api_key: String,
    pub football_data_url: String,
    pub football_data_season: Option<u16>,
    pub database_url: String,
    pub valkey_url: String,
    pub matches_window_days: i64,
    pub job_timeout: Duration,
    pub teams_cron: String,
    pub standings_cron: String,
    pub matches_cron: String,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every optional value valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let football_data_season = match lookup("FOOTBALL_DATA_SEASON") {
            Some(value) => Some(parse_var("FOOTBALL_DATA_SEASON", &value)?),
            None => None,
        };

        let matches_window_days = match lookup("MATCHES_WINDOW_DAYS") {
            Some(value) => {
                let days: i64 = parse_var("MATCHES_WINDOW_DAYS", &value)?;
                if !(1..=MAX_MATCHES_WINDOW_DAYS).contains(&days) {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "MATCHES_WINDOW_DAYS".to_string(),
                        reason: format!("must be between 1 and {}", MAX_MATCHES_WINDOW_DAYS),
                    });
                }
                days
            }
            None => DEFAULT_MATCHES_WINDOW_DAYS,
        };

        let job_timeout_secs = match lookup("SYNC_JOB_TIMEOUT_SECS") {
            Some(value) => parse_var("SYNC_JOB_TIMEOUT_SECS", &value)?,
            None => DEFAULT_JOB_TIMEOUT_SECS,
        };

        Ok(Self {
            football_data_api_key: required("FOOTBALL_DATA_API_KEY")?,
            football_data_url: lookup("FOOTBALL_DATA_URL")
                .unwrap_or_else(|| DEFAULT_FOOTBALL_DATA_URL.to_string()),
            football_data_season,
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            matches_window_days,
            job_timeout: Duration::from_secs(job_timeout_secs),
            teams_cron: lookup("TEAMS_CRON")
                .unwrap_or_else(|| schedule_config::teams::CRON_EXPRESSION.to_string()),
            standings_cron: lookup("STANDINGS_CRON")
                .unwrap_or_else(|| schedule_config::standings::CRON_EXPRESSION.to_string()),
            matches_cron: lookup("MATCHES_CRON")
                .unwrap_or_else(|| schedule_config::matches::CRON_EXPRESSION.to_string()),
        })
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
