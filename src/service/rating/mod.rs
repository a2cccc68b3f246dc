//! Match interest rating.
//!
//! A fixture's rating combines how strong both sides are in their league tables, how
//! prestigious their leagues are, and their recent form, then scales the result by rivalry,
//! knockout stage, and cross-league bonuses. Ratings live in `[0.1, 1.0]` with the default
//! policy.

pub mod policy;
pub mod source;

#[cfg(test)]
mod tests;

use std::{fmt, sync::Arc};

use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::{
        feed::{WINNER_AWAY, WINNER_HOME},
        fixture::Fixture,
        league::LeagueTable,
    },
    service::rating::{policy::RatingPolicy, source::RatingSource},
};

/// Side of a fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Why a fixture could not be rated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The side is not ranked in any tracked league.
    LeagueUnresolved { side: Side, team_id: i64 },
    /// The side resolved to a league but has no row in its table.
    NotRanked {
        side: Side,
        team_id: i64,
        league: String,
    },
    /// The side resolved to a league missing from the league table.
    UnknownLeague { side: Side, league: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::LeagueUnresolved { side, team_id } => {
                write!(f, "{} team {} is not ranked in any tracked league", side, team_id)
            }
            SkipReason::NotRanked {
                side,
                team_id,
                league,
            } => write!(f, "{} team {} has no standing in {}", side, team_id, league),
            SkipReason::UnknownLeague { side, league } => {
                write!(f, "{} team resolved to untracked league {}", side, league)
            }
        }
    }
}

/// Result of scoring a fixture.
#[derive(Clone, Debug, PartialEq)]
pub enum RatingOutcome {
    Rated(f64),
    /// Not enough data to rate; the stored rating must be left untouched.
    Skipped(SkipReason),
}

/// Per-side and bonus inputs of the rating formula.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingInputs {
    pub home_strength: f64,
    pub away_strength: f64,
    pub home_league_weight: f64,
    pub away_league_weight: f64,
    pub home_form: f64,
    pub away_form: f64,
    pub derby_bonus: f64,
    pub stage_bonus: f64,
    pub cross_league_bonus: f64,
}

/// Scores fixtures according to a [`RatingPolicy`].
#[derive(Clone)]
pub struct RatingCalculator {
    policy: Arc<RatingPolicy>,
    leagues: Arc<LeagueTable>,
}

struct RankedSide {
    league: String,
    strength: f64,
}

impl RatingCalculator {
    pub fn new(policy: Arc<RatingPolicy>, leagues: Arc<LeagueTable>) -> Self {
        Self { policy, leagues }
    }

    /// Scores a fixture.
    ///
    /// # Arguments
    /// - `fixture` - Normalized fixture to score
    /// - `source` - League, standings, short name, and history lookups
    ///
    /// # Returns
    /// - `Ok(RatingOutcome::Rated(f64))` - Rating within the policy bounds
    /// - `Ok(RatingOutcome::Skipped(_))` - A side could not be resolved or has no standing
    /// - `Err(Error)` - A lookup failed
    pub async fn rate<S>(&self, fixture: &Fixture, source: &S) -> Result<RatingOutcome, Error>
    where
        S: RatingSource + ?Sized,
    {
        let home = match self.rank(Side::Home, fixture.home.id, source).await? {
            Ok(side) => side,
            Err(reason) => return Ok(RatingOutcome::Skipped(reason)),
        };
        let away = match self.rank(Side::Away, fixture.away.id, source).await? {
            Ok(side) => side,
            Err(reason) => return Ok(RatingOutcome::Skipped(reason)),
        };

        let home_form = self.form(fixture, fixture.home.id, source).await?;
        let away_form = self.form(fixture, fixture.away.id, source).await?;

        let derby_bonus = self.derby_bonus(fixture, &home.league, &away.league, source).await?;

        let continental = self
            .leagues
            .get(&fixture.competition)
            .is_some_and(|league| league.continental);
        let stage_bonus = match (&fixture.stage, continental) {
            (Some(stage), true) => self.policy.stage_bonus_of(stage),
            _ => 0.0,
        };

        let cross_league_bonus = if home.league != away.league {
            self.policy.cross_league_bonus
        } else {
            0.0
        };

        let inputs = RatingInputs {
            home_strength: home.strength,
            away_strength: away.strength,
            home_league_weight: self.policy.league_weight_of(&home.league),
            away_league_weight: self.policy.league_weight_of(&away.league),
            home_form,
            away_form,
            derby_bonus,
            stage_bonus,
            cross_league_bonus,
        };

        Ok(RatingOutcome::Rated(self.compute(&inputs)))
    }

    /// Applies the rating formula to already gathered inputs.
    pub fn compute(&self, inputs: &RatingInputs) -> f64 {
        let policy = &self.policy;

        let strength = (inputs.home_strength + inputs.away_strength) / 2.0;
        let league_weight = (inputs.home_league_weight + inputs.away_league_weight) / 2.0;
        let form = (inputs.home_form + inputs.away_form) / 2.0;

        let base = policy.strength_weight * strength
            + policy.league_weight * league_weight
            + policy.form_weight * form;
        let multiplier =
            1.0 + inputs.derby_bonus + inputs.stage_bonus + inputs.cross_league_bonus;

        (base * multiplier).clamp(policy.min_rating, policy.max_rating)
    }

    /// Strength of a side from its table position, 1 for the leader and 0 for the last place.
    pub fn strength(position: i32, team_count: u32) -> f64 {
        if team_count <= 1 {
            return 1.0;
        }

        let n = team_count as f64;
        ((n - position as f64) / (n - 1.0)).clamp(0.0, 1.0)
    }

    /// Fraction of `history` won by `team_id`, `None` without any finished match.
    pub fn win_ratio(team_id: i64, history: &[Fixture]) -> Option<f64> {
        if history.is_empty() {
            return None;
        }

        let wins = history
            .iter()
            .filter(|fixture| match fixture.winner.as_deref() {
                Some(WINNER_HOME) => fixture.home.id == team_id,
                Some(WINNER_AWAY) => fixture.away.id == team_id,
                _ => false,
            })
            .count();

        Some(wins as f64 / history.len() as f64)
    }

    async fn rank<S>(
        &self,
        side: Side,
        team_id: i64,
        source: &S,
    ) -> Result<Result<RankedSide, SkipReason>, Error>
    where
        S: RatingSource + ?Sized,
    {
        let Some(league) = source.resolve_league(team_id).await? else {
            return Ok(Err(SkipReason::LeagueUnresolved { side, team_id }));
        };

        let Some(team_count) = self.leagues.get(&league).map(|l| l.team_count) else {
            return Ok(Err(SkipReason::UnknownLeague { side, league }));
        };

        let Some(position) = source.team_position(&league, team_id).await? else {
            return Ok(Err(SkipReason::NotRanked {
                side,
                team_id,
                league,
            }));
        };

        Ok(Ok(RankedSide {
            strength: Self::strength(position, team_count),
            league,
        }))
    }

    async fn form<S>(&self, fixture: &Fixture, team_id: i64, source: &S) -> Result<f64, Error>
    where
        S: RatingSource + ?Sized,
    {
        let history = source
            .recent_finished_matches(team_id, fixture.utc_date, self.policy.form_window)
            .await?;

        Ok(Self::win_ratio(team_id, &history).unwrap_or(self.policy.neutral_form))
    }

    async fn derby_bonus<S>(
        &self,
        fixture: &Fixture,
        home_league: &str,
        away_league: &str,
        source: &S,
    ) -> Result<f64, Error>
    where
        S: RatingSource + ?Sized,
    {
        let home = source.team_short_name(home_league, &fixture.home.name).await?;
        let away = source.team_short_name(away_league, &fixture.away.name).await?;

        match (home, away) {
            (Some(home), Some(away)) => Ok(self.policy.derby_bonus_of(&home, &away)),
            _ => {
                tracing::debug!(
                    "No short name for {} or {}, derby bonus not applied",
                    fixture.home.name,
                    fixture.away.name
                );
                Ok(0.0)
            }
        }
    }
}
