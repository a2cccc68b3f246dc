use chrono::{DateTime, Utc};

use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn football<'a>(&'a mut self) -> FootballFixtures<'a> {
        FootballFixtures { setup: self }
    }
}

pub struct FootballFixtures<'a> {
    pub setup: &'a mut TestContext,
}

/// Fixture description shared by the database factory and the mock feed payloads.
#[derive(Clone, Debug)]
pub struct FixtureMatch {
    pub match_id: i64,
    /// Upstream competition code, e.g. `PL`
    pub competition_code: String,
    pub stage: Option<String>,
    pub home: (i64, String),
    pub away: (i64, String),
    pub utc_date: DateTime<Utc>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub winner: Option<String>,
}

impl FixtureMatch {
    /// Scheduled regular season fixture.
    pub fn new(
        match_id: i64,
        competition_code: &str,
        home: (i64, &str),
        away: (i64, &str),
        utc_date: DateTime<Utc>,
    ) -> Self {
        Self {
            match_id,
            competition_code: competition_code.to_string(),
            stage: Some("REGULAR_SEASON".to_string()),
            home: (home.0, home.1.to_string()),
            away: (away.0, away.1.to_string()),
            utc_date,
            status: "TIMED".to_string(),
            home_score: None,
            away_score: None,
            winner: None,
        }
    }

    /// Marks the fixture as played with the given full-time score.
    pub fn finished(mut self, home_score: i32, away_score: i32) -> Self {
        self.status = "FINISHED".to_string();
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.winner = Some(
            match home_score.cmp(&away_score) {
                std::cmp::Ordering::Greater => "HOME_TEAM",
                std::cmp::Ordering::Less => "AWAY_TEAM",
                std::cmp::Ordering::Equal => "DRAW",
            }
            .to_string(),
        );
        self
    }

    pub fn with_stage(mut self, stage: &str) -> Self {
        self.stage = Some(stage.to_string());
        self
    }
}
