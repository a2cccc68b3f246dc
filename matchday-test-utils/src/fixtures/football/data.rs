//! Feed payloads as returned by football-data.org v4.

use serde_json::{json, Value};

use super::FixtureMatch;

pub fn team(id: i64, name: &str, short_name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "shortName": short_name,
        "tla": short_name.chars().take(3).collect::<String>().to_uppercase(),
        "founded": 1900
    })
}

pub fn standing(position: i32, id: i64, name: &str, short_name: &str) -> Value {
    let played = 10;
    let won = (10 - position).clamp(0, 10);
    let lost = played - won;

    json!({
        "position": position,
        "team": { "id": id, "name": name, "shortName": short_name },
        "playedGames": played,
        "won": won,
        "draw": 0,
        "lost": lost,
        "points": won * 3,
        "goalsFor": won * 2,
        "goalsAgainst": lost,
        "goalDifference": won * 2 - lost
    })
}

/// Standings body holding a single `TOTAL` table built from `(id, name, short_name)` rows in
/// position order.
pub fn standings_body(rows: &[(i64, &str, &str)]) -> Value {
    let table: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (id, name, short_name))| standing(i as i32 + 1, *id, name, short_name))
        .collect();

    json!({
        "standings": [
            { "stage": "REGULAR_SEASON", "type": "TOTAL", "table": table }
        ]
    })
}

pub fn teams_body(teams: Vec<Value>) -> Value {
    json!({ "count": teams.len(), "teams": teams })
}

pub fn fixture(fixture: &FixtureMatch) -> Value {
    json!({
        "id": fixture.match_id,
        "utcDate": fixture.utc_date.to_rfc3339(),
        "status": fixture.status,
        "stage": fixture.stage,
        "competition": {
            "id": 2000,
            "name": fixture.competition_code,
            "code": fixture.competition_code
        },
        "homeTeam": { "id": fixture.home.0, "name": fixture.home.1 },
        "awayTeam": { "id": fixture.away.0, "name": fixture.away.1 },
        "score": {
            "winner": fixture.winner,
            "fullTime": { "home": fixture.home_score, "away": fixture.away_score }
        }
    })
}

pub fn matches_body(fixtures: &[FixtureMatch]) -> Value {
    let matches: Vec<Value> = fixtures.iter().map(fixture).collect();
    json!({ "resultSet": { "count": matches.len() }, "matches": matches })
}
