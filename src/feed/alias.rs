//! Canonical naming for upstream records.
//!
//! The feed spells some clubs differently across endpoints and seasons, and its short names
//! don't always match the names used by the rivalry table. Every record passes through
//! [`NameAliases`] before it is persisted so lookups by name stay exact.

use std::collections::HashMap;

use crate::model::{
    feed::{FeedMatch, FeedSide, FeedStanding, FeedTeam},
    fixture::{Fixture, FixtureSide},
    league::LeagueTable,
};

const TEAM_NAME_ALIASES: &[(&str, &str)] = &[
    ("Wolverhampton Wanderers FC", "Wolverhampton FC"),
    ("Borussia Mönchengladbach", "Borussia Gladbach"),
    ("FC Internazionale Milano", "Inter"),
    ("Club Atlético de Madrid", "Atletico Madrid"),
    ("RCD Espanyol de Barcelona", "Espanyol"),
    ("Rayo Vallecano de Madrid", "Rayo Vallecano"),
    ("Real Betis Balompié", "Real Betis"),
    ("Real Sociedad de Fútbol", "Real Sociedad"),
];

const SHORT_NAME_ALIASES: &[(&str, &str)] = &[
    ("Sevilla FC", "Sevilla"),
    ("Leverkusen", "Bayer"),
    ("Dortmund", "Borussia D."),
    ("M'gladbach", "Borussia M."),
    ("Atleti", "Atletico"),
    ("Barça", "Barcelona"),
    ("Leganés", "Leganes"),
    ("Man United", "Manchester United"),
    ("Man City", "Manchester City"),
];

/// Short names forced for a canonical full name, applied after the short name aliases.
const SHORT_NAME_BY_TEAM: &[(&str, &str)] = &[("Sevilla FC", "Sevilla")];

/// Immutable alias lookup tables.
#[derive(Clone, Debug)]
pub struct NameAliases {
    team_names: HashMap<String, String>,
    short_names: HashMap<String, String>,
    short_name_by_team: HashMap<String, String>,
}

impl NameAliases {
    /// Creates alias tables from explicit pairs of `(upstream, canonical)` names.
    pub fn new(
        team_names: &[(&str, &str)],
        short_names: &[(&str, &str)],
        short_name_by_team: &[(&str, &str)],
    ) -> Self {
        let to_map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect::<HashMap<_, _>>()
        };

        Self {
            team_names: to_map(team_names),
            short_names: to_map(short_names),
            short_name_by_team: to_map(short_name_by_team),
        }
    }

    /// Canonical full name of a team.
    pub fn team_name(&self, name: &str) -> String {
        self.team_names
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Canonical short name of a team, given its upstream full and short names.
    ///
    /// Falls back to the full name when the feed has no short name for the team.
    pub fn short_name(&self, full_name: &str, short_name: Option<&str>) -> String {
        if let Some(forced) = self.short_name_by_team.get(full_name) {
            return forced.clone();
        }

        let short_name = short_name.unwrap_or(full_name);
        self.short_names
            .get(short_name)
            .cloned()
            .unwrap_or_else(|| short_name.to_string())
    }

    /// Applies the alias tables to a team record.
    pub fn normalize_team(&self, team: FeedTeam) -> FeedTeam {
        let short_name = self.short_name(&team.name, team.short_name.as_deref());
        FeedTeam {
            name: self.team_name(&team.name),
            short_name: Some(short_name),
            ..team
        }
    }

    /// Applies the alias tables to the team embedded in a standings row.
    pub fn normalize_standing(&self, mut standing: FeedStanding) -> FeedStanding {
        let short_name = self.short_name(&standing.team.name, standing.team.short_name.as_deref());
        standing.team.name = self.team_name(&standing.team.name);
        standing.team.short_name = Some(short_name);
        standing
    }

    /// Converts a feed fixture into a [`Fixture`] of a tracked league.
    ///
    /// # Returns
    /// - `Some(Fixture)` - The competition is tracked and both sides are known
    /// - `None` - The competition is not in the league table, or a side is still undecided
    pub fn normalize_match(&self, feed_match: FeedMatch, leagues: &LeagueTable) -> Option<Fixture> {
        let league = feed_match
            .competition
            .code
            .as_deref()
            .and_then(|code| leagues.by_code(code))?;

        let home = self.side(&feed_match.home_team)?;
        let away = self.side(&feed_match.away_team)?;

        Some(Fixture {
            match_id: feed_match.id,
            competition: league.key.clone(),
            stage: feed_match.stage,
            home,
            away,
            utc_date: feed_match.utc_date,
            status: feed_match.status,
            home_score: feed_match.score.full_time.home,
            away_score: feed_match.score.full_time.away,
            winner: feed_match.score.winner,
        })
    }

    fn side(&self, side: &FeedSide) -> Option<FixtureSide> {
        Some(FixtureSide {
            id: side.id?,
            name: self.team_name(side.name.as_deref()?),
        })
    }
}

impl Default for NameAliases {
    fn default() -> Self {
        Self::new(TEAM_NAME_ALIASES, SHORT_NAME_ALIASES, SHORT_NAME_BY_TEAM)
    }
}
