//! Records returned by the football-data.org v4 API.
//!
//! Only the fields the service persists or scores with are modelled; everything else in the
//! upstream payloads is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final score side reported for a finished fixture.
pub const WINNER_HOME: &str = "HOME_TEAM";
/// Final score side reported for a finished fixture.
pub const WINNER_AWAY: &str = "AWAY_TEAM";
/// Status of a fixture that has been played to completion.
pub const STATUS_FINISHED: &str = "FINISHED";

/// Team as listed by `/v4/competitions/{code}/teams`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
}

/// Team reference embedded in standings rows and fixtures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedTeamRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
}

/// One row of a league table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStanding {
    pub position: i32,
    pub team: FeedTeamRef,
    pub played_games: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}

/// Side of a fixture.
///
/// Knockout fixtures are published before the participants are known, in which case the
/// upstream sends `null` for the identifier and the name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSide {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

/// Competition a fixture belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedCompetition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Goals scored by each side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedGoals {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

/// Score block of a fixture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedScore {
    /// `HOME_TEAM`, `AWAY_TEAM`, `DRAW`, or absent before the final whistle
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub full_time: FeedGoals,
}

/// Fixture as listed by `/v4/matches`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMatch {
    pub id: i64,
    pub utc_date: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub stage: Option<String>,
    pub competition: FeedCompetition,
    pub home_team: FeedSide,
    pub away_team: FeedSide,
    #[serde(default)]
    pub score: FeedScore,
}

/// Body of `/v4/competitions/{code}/teams`.
#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<FeedTeam>,
}

/// One table (total, home, away) of a standings response.
#[derive(Debug, Deserialize)]
pub struct StandingsGroup {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub table: Vec<FeedStanding>,
}

/// Body of `/v4/competitions/{code}/standings`.
#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingsGroup>,
}

/// Body of `/v4/matches`.
#[derive(Debug, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<FeedMatch>,
}
