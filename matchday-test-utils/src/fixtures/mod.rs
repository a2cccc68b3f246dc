//! Test fixture modules for database and HTTP mock creation.
//!
//! - `football` - Teams, standings, and fixtures, both as database rows and as feed payloads

pub mod football;
