//! Mock football-data.org endpoints.

use mockito::{Matcher, Mock};
use serde_json::Value;

use super::{data, FixtureMatch, FootballFixtures};
use crate::constant::TEST_API_KEY;

impl<'a> FootballFixtures<'a> {
    pub fn create_teams_endpoint(
        &mut self,
        league_code: &str,
        teams: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/v4/competitions/{}/teams", league_code).as_str())
            .match_header("X-Auth-Token", TEST_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(data::teams_body(teams).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Standings endpoint serving one `TOTAL` table, rows given in position order.
    pub fn create_standings_endpoint(
        &mut self,
        league_code: &str,
        rows: &[(i64, &str, &str)],
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/v4/competitions/{}/standings", league_code).as_str())
            .match_query(Matcher::Any)
            .match_header("X-Auth-Token", TEST_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(data::standings_body(rows).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Standings endpoint serving an arbitrary body.
    pub fn create_raw_standings_endpoint(
        &mut self,
        league_code: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/v4/competitions/{}/standings", league_code).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_matches_endpoint(
        &mut self,
        fixtures: &[FixtureMatch],
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/v4/matches")
            .match_query(Matcher::Any)
            .match_header("X-Auth-Token", TEST_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(data::matches_body(fixtures).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Endpoint answering every request on `path` with `status`.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body("{\"message\": \"error\"}")
            .expect(expected_requests)
            .create()
    }
}
