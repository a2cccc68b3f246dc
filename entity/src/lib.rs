//! SeaORM entities for persisted football data.

pub mod prelude;

pub mod football_match;
pub mod standing;
pub mod team;
