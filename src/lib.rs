//! Football data synchronization and match rating engine.
//!
//! This crate keeps a local store of football teams, league standings, and fixtures in sync
//! with the football-data.org feed, and scores every fixture with an "interest rating" so
//! downstream consumers can rank matches by significance. Periodic cron jobs drive the
//! refresh, and rendered-artifact caches are invalidated whenever the underlying data changes.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod feed;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
