
use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    error::Error,
    model::{
        feed::{STATUS_FINISHED, WINNER_AWAY, WINNER_HOME},
        fixture::{Fixture, FixtureSide},
        league::LeagueTable,
    },
    service::rating::{policy::RatingPolicy, source::RatingSource, RatingCalculator},
};

pub(super) fn calculator() -> RatingCalculator {
    RatingCalculator::new(
        Arc::new(RatingPolicy::default()),
        Arc::new(LeagueTable::default()),
    )
}

pub(super) fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 9, 16, 30, 0).unwrap()
}

pub(super) fn fixture(
    competition: &str,
    stage: Option<&str>,
    home: (i64, &str),
    away: (i64, &str),
) -> Fixture {
    Fixture {
        match_id: 1,
        competition: competition.to_string(),
        stage: stage.map(str::to_string),
        home: FixtureSide {
            id: home.0,
            name: home.1.to_string(),
        },
        away: FixtureSide {
            id: away.0,
            name: away.1.to_string(),
        },
        utc_date: kickoff(),
        status: "TIMED".to_string(),
        home_score: None,
        away_score: None,
        winner: None,
    }
}

/// Finished fixture `days` before kickoff won by `winner` against an unrelated opponent.
pub(super) fn played(team_id: i64, won: bool, days: i64) -> Fixture {
    let mut fixture = fixture("PremierLeague", None, (team_id, "Team"), (9999, "Opponent"));
    fixture.utc_date = kickoff() - Duration::days(days);
    fixture.status = STATUS_FINISHED.to_string();
    fixture.winner = Some(if won { WINNER_HOME } else { WINNER_AWAY }.to_string());
    fixture
}

/// In-memory [`RatingSource`].
#[derive(Default)]
pub(super) struct FakeSource {
    leagues: HashMap<i64, String>,
    positions: HashMap<(String, i64), i32>,
    short_names: HashMap<(String, String), String>,
    history: HashMap<i64, Vec<Fixture>>,
    failing: bool,
}

impl FakeSource {
    pub(super) fn with_team(
        mut self,
        league: &str,
        team_id: i64,
        name: &str,
        short_name: &str,
        position: i32,
    ) -> Self {
        self.leagues.insert(team_id, league.to_string());
        self.positions
            .insert((league.to_string(), team_id), position);
        self.short_names.insert(
            (league.to_string(), name.to_string()),
            short_name.to_string(),
        );
        self
    }

    /// Team resolving to a league without a standing row.
    pub(super) fn with_unranked_team(mut self, league: &str, team_id: i64) -> Self {
        self.leagues.insert(team_id, league.to_string());
        self
    }

    pub(super) fn with_history(mut self, team_id: i64, history: Vec<Fixture>) -> Self {
        self.history.insert(team_id, history);
        self
    }

    pub(super) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

#[async_trait]
impl RatingSource for FakeSource {
    async fn resolve_league(&self, team_id: i64) -> Result<Option<String>, Error> {
        if self.failing {
            return Err(Error::DbErr(sea_orm::DbErr::Custom("store offline".to_string())));
        }
        Ok(self.leagues.get(&team_id).cloned())
    }

    async fn team_position(&self, league: &str, team_id: i64) -> Result<Option<i32>, Error> {
        Ok(self
            .positions
            .get(&(league.to_string(), team_id))
            .copied())
    }

    async fn team_short_name(&self, league: &str, name: &str) -> Result<Option<String>, Error> {
        Ok(self
            .short_names
            .get(&(league.to_string(), name.to_string()))
            .cloned())
    }

    async fn recent_finished_matches(
        &self,
        team_id: i64,
        before: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Fixture>, Error> {
        Ok(self
            .history
            .get(&team_id)
            .map(|history| {
                history
                    .iter()
                    .filter(|fixture| fixture.utc_date < before)
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
