//! Static league membership configuration.
//!
//! The league table is read-only reference data describing every competition the service
//! tracks. It is built once at startup and shared behind an `Arc`; nothing in the pipeline
//! mutates it.

/// A competition tracked by the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct League {
    /// Stable internal key, e.g. `PremierLeague`
    pub key: String,
    /// Human readable name, e.g. `Premier League`
    pub name: String,
    /// Partition name of the league's rendered artifacts, e.g. `table_image:{collection}`
    pub collection: String,
    /// Upstream football-data.org competition code, e.g. `PL`
    pub code: String,
    /// Number of teams in the league table
    pub team_count: u32,
    /// Continental competitions (knockout stages, clubs from several leagues)
    pub continental: bool,
}

impl League {
    /// Creates a league whose storage partition equals its key.
    pub fn new(key: &str, name: &str, code: &str, team_count: u32, continental: bool) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            collection: key.to_string(),
            code: code.to_string(),
            team_count,
            continental,
        }
    }
}

/// Ordered table of tracked leagues.
///
/// Iteration order is the order leagues are processed by the sync jobs and the precedence
/// order used when a team appears in several league tables: domestic leagues are listed
/// before continental competitions so a club resolves to its home league.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueTable {
    leagues: Vec<League>,
}

impl LeagueTable {
    /// Creates a league table from an explicit list.
    pub fn new(leagues: Vec<League>) -> Self {
        Self { leagues }
    }

    /// Iterates over the leagues in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &League> {
        self.leagues.iter()
    }

    /// Looks up a league by its internal key.
    pub fn get(&self, key: &str) -> Option<&League> {
        self.leagues.iter().find(|league| league.key == key)
    }

    /// Looks up a league by its upstream competition code.
    pub fn by_code(&self, code: &str) -> Option<&League> {
        self.leagues.iter().find(|league| league.code == code)
    }

    /// Number of tracked leagues.
    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    /// Whether the table tracks no leagues at all.
    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}

impl Default for LeagueTable {
    fn default() -> Self {
        Self::new(vec![
            League::new("PremierLeague", "Premier League", "PL", 20, false),
            League::new("LaLiga", "La Liga", "PD", 20, false),
            League::new("Bundesliga", "Bundesliga", "BL1", 18, false),
            League::new("SerieA", "Serie A", "SA", 20, false),
            League::new("Ligue1", "Ligue 1", "FL1", 18, false),
            League::new("ChampionsLeague", "Champions League", "CL", 36, true),
        ])
    }
}
