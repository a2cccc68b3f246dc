//! Domain models and type definitions.
//!
//! This module contains the static league configuration, the typed records returned by the
//! football-data.org feed, database model type aliases, and the shared state handed to every
//! sync job.

pub mod app;
pub mod db;
pub mod feed;
pub mod fixture;
pub mod league;
