//! Database model type aliases.
//!
//! These aliases simplify type signatures across repositories and services without importing
//! from the `entity` crate directly.

/// Team of a league, recreated wholesale by the teams job.
pub type TeamModel = entity::team::Model;

/// One row of a league table, replaced in full by the standings job.
pub type StandingModel = entity::standing::Model;

/// Fixture upserted by the matches job, carrying the derived `rating`.
pub type MatchModel = entity::football_match::Model;
