//! Shared helpers.

pub mod time;
