//! Rating constants.
//!
//! Every number the calculator uses lives in [`RatingPolicy`] so deployments and tests can
//! swap the tables without touching the scoring code.

use std::collections::HashMap;

const LEAGUE_WEIGHTS: &[(&str, f64)] = &[
    ("ChampionsLeague", 1.0),
    ("PremierLeague", 0.9),
    ("LaLiga", 0.8),
    ("SerieA", 0.8),
    ("Bundesliga", 0.75),
    ("Ligue1", 0.7),
];

const STAGE_BONUSES: &[(&str, f64)] = &[
    ("PLAYOFFS", 0.25),
    ("LAST_16", 0.5),
    ("QUARTER_FINALS", 0.75),
    ("SEMI_FINALS", 0.9),
    ("FINAL", 1.0),
];

const DERBIES: &[(&str, &str, f64)] = &[
    // England
    ("Manchester United", "Manchester City", 0.27),
    ("Liverpool", "Everton", 0.16),
    ("Arsenal", "Tottenham", 0.25),
    ("Chelsea", "Arsenal", 0.25),
    ("Chelsea", "Tottenham", 0.25),
    ("Manchester United", "Liverpool", 0.26),
    ("Manchester United", "Leeds United", 0.15),
    ("Newcastle", "Sunderland", 0.14),
    // Spain
    ("Real Madrid", "Barcelona", 0.35),
    ("Atletico", "Real Madrid", 0.26),
    ("Sevilla", "Real Betis", 0.2),
    ("Barcelona", "Espanyol", 0.18),
    ("Valencia", "Levante", 0.14),
    // Germany
    ("Borussia D.", "Bayern", 0.28),
    ("Schalke 04", "Borussia Dortmund", 0.16),
    ("Hamburger SV", "Werder Bremen", 0.15),
    ("Bayern", "1860 Munich", 0.14),
    ("Cologne", "Borussia M.", 0.14),
    // Italy
    ("Inter", "Milan", 0.29),
    ("Roma", "Lazio", 0.28),
    ("Juventus", "Torino", 0.2),
    ("Genoa", "Sampdoria", 0.18),
    ("Napoli", "Roma", 0.15),
    // France
    ("PSG", "Marseille", 0.23),
    ("Olympique Lyon", "Saint-Etienne", 0.18),
    ("Nice", "Monaco", 0.14),
    ("Lille", "RC Lens", 0.14),
];

/// Rivalry bonuses keyed by an unordered pair of team short names.
#[derive(Clone, Debug, Default)]
pub struct DerbyTable {
    bonuses: HashMap<(String, String), f64>,
}

impl DerbyTable {
    /// Creates a derby table from `(short name, short name, bonus)` triples.
    pub fn new(derbies: &[(&str, &str, f64)]) -> Self {
        let bonuses = derbies
            .iter()
            .map(|(a, b, bonus)| (Self::key(a, b), *bonus))
            .collect();

        Self { bonuses }
    }

    /// Bonus for a pairing, regardless of which side plays at home.
    pub fn bonus(&self, a: &str, b: &str) -> Option<f64> {
        self.bonuses.get(&Self::key(a, b)).copied()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }
}

/// Weights, bonus tables, and bounds of the rating formula.
///
/// `base = strength_weight * avg(strength) + league_weight * avg(league weight) +
/// form_weight * avg(form)`, `rating = base * (1 + derby + stage + cross_league)`,
/// clamped to `[min_rating, max_rating]`.
#[derive(Clone, Debug)]
pub struct RatingPolicy {
    pub league_weights: HashMap<String, f64>,
    pub stage_bonuses: HashMap<String, f64>,
    pub derbies: DerbyTable,
    pub cross_league_bonus: f64,
    pub strength_weight: f64,
    pub league_weight: f64,
    pub form_weight: f64,
    /// Number of most recent finished matches form is computed over
    pub form_window: u64,
    /// Form of a side with no finished match on record
    pub neutral_form: f64,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl RatingPolicy {
    /// Prestige weight of a league, 0 for leagues without a configured weight.
    pub fn league_weight_of(&self, league: &str) -> f64 {
        self.league_weights.get(league).copied().unwrap_or(0.0)
    }

    /// Knockout stage bonus, 0 for stages without a configured bonus.
    pub fn stage_bonus_of(&self, stage: &str) -> f64 {
        self.stage_bonuses.get(stage).copied().unwrap_or(0.0)
    }

    /// Derby bonus between two short names, 0 when the pairing is not a derby.
    pub fn derby_bonus_of(&self, a: &str, b: &str) -> f64 {
        self.derbies.bonus(a, b).unwrap_or(0.0)
    }
}

impl Default for RatingPolicy {
    fn default() -> Self {
        let to_map = |pairs: &[(&str, f64)]| {
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect::<HashMap<_, _>>()
        };

        Self {
            league_weights: to_map(LEAGUE_WEIGHTS),
            stage_bonuses: to_map(STAGE_BONUSES),
            derbies: DerbyTable::new(DERBIES),
            cross_league_bonus: 0.15,
            strength_weight: 0.15,
            league_weight: 0.35,
            form_weight: 0.15,
            form_window: 5,
            neutral_form: 0.5,
            min_rating: 0.1,
            max_rating: 1.0,
        }
    }
}
