//! Normalized fixture records.

use chrono::{DateTime, Utc};

use crate::model::db::MatchModel;

/// One side of a normalized fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureSide {
    pub id: i64,
    pub name: String,
}

/// Fixture after alias normalization, keyed to a tracked league.
///
/// `competition` holds the league key from the league table rather than the upstream
/// competition name.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub match_id: i64,
    pub competition: String,
    pub stage: Option<String>,
    pub home: FixtureSide,
    pub away: FixtureSide,
    pub utc_date: DateTime<Utc>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub winner: Option<String>,
}

impl From<&MatchModel> for Fixture {
    fn from(model: &MatchModel) -> Self {
        Self {
            match_id: model.match_id,
            competition: model.competition.clone(),
            stage: model.stage.clone(),
            home: FixtureSide {
                id: model.home_team_id,
                name: model.home_team_name.clone(),
            },
            away: FixtureSide {
                id: model.away_team_id,
                name: model.away_team_name.clone(),
            },
            utc_date: model.utc_date.and_utc(),
            status: model.status.clone(),
            home_score: model.home_score,
            away_score: model.away_score,
            winner: model.winner.clone(),
        }
    }
}
