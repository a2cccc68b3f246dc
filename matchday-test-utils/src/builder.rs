//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, fixtures::football::FixtureMatch, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// database rows, and mock feed endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_football_tables: bool,

    // Database fixtures to insert
    teams: Vec<(String, i64, String, String)>, // (league, team_id, name, short_name)
    tables_rows: Vec<(String, Vec<(i64, String)>)>, // (league, [(team_id, name)] in position order)
    matches: Vec<(String, FixtureMatch, Option<f64>)>, // (league, fixture, rating)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    teams_endpoints: Vec<(String, Vec<Value>, usize)>,
    standings_endpoints: Vec<(String, Vec<(i64, String, String)>, usize)>,
    matches_endpoints: Vec<(Vec<FixtureMatch>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_football_tables: false,
            teams: Vec::new(),
            tables_rows: Vec::new(),
            matches: Vec::new(),
            mock_builders: Vec::new(),
            teams_endpoints: Vec::new(),
            standings_endpoints: Vec::new(),
            matches_endpoints: Vec::new(),
        }
    }

    /// Add the team, standing, and football_match tables to the test database.
    pub fn with_football_tables(mut self) -> Self {
        self.include_football_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use matchday_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), matchday_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(Standing)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a team row into the database.
    pub fn with_team(mut self, league: &str, team_id: i64, name: &str, short_name: &str) -> Self {
        self.teams.push((
            league.to_string(),
            team_id,
            name.to_string(),
            short_name.to_string(),
        ));
        self
    }

    /// Insert a league table into the database, positions following the order of `teams`.
    pub fn with_league_table(mut self, league: &str, teams: &[(i64, &str)]) -> Self {
        self.tables_rows.push((
            league.to_string(),
            teams
                .iter()
                .map(|(id, name)| (*id, name.to_string()))
                .collect(),
        ));
        self
    }

    /// Insert a fixture into the database.
    pub fn with_match(mut self, league: &str, fixture: FixtureMatch, rating: Option<f64>) -> Self {
        self.matches.push((league.to_string(), fixture, rating));
        self
    }

    /// Add a mock `/v4/competitions/{code}/teams` endpoint.
    ///
    /// # Arguments
    /// - `league_code` - Upstream competition code
    /// - `teams` - Team payloads, see [`data::team`](crate::fixtures::football::data::team)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_teams_endpoint(
        mut self,
        league_code: &str,
        teams: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.teams_endpoints
            .push((league_code.to_string(), teams, expected_requests));
        self
    }

    /// Add a mock `/v4/competitions/{code}/standings` endpoint.
    ///
    /// # Arguments
    /// - `league_code` - Upstream competition code
    /// - `rows` - `(team_id, name, short_name)` in position order
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_standings_endpoint(
        mut self,
        league_code: &str,
        rows: &[(i64, &str, &str)],
        expected_requests: usize,
    ) -> Self {
        self.standings_endpoints.push((
            league_code.to_string(),
            rows.iter()
                .map(|(id, name, short)| (*id, name.to_string(), short.to_string()))
                .collect(),
            expected_requests,
        ));
        self
    }

    /// Add a mock `/v4/matches` endpoint serving `fixtures` for any date window.
    pub fn with_matches_endpoint(
        mut self,
        fixtures: Vec<FixtureMatch>,
        expected_requests: usize,
    ) -> Self {
        self.matches_endpoints.push((fixtures, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (football tables if specified, then custom tables)
    /// 2. Inserts database fixtures (teams, league tables, fixtures)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then feed shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_football_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Standing),
                schema.create_table_from_entity(entity::prelude::FootballMatch),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (league, team_id, name, short_name) in self.teams {
            setup
                .football()
                .insert_team(&league, team_id, &name, &short_name)
                .await?;
        }

        for (league, rows) in self.tables_rows {
            let rows: Vec<(i64, &str)> = rows.iter().map(|(id, n)| (*id, n.as_str())).collect();
            setup.football().insert_table(&league, &rows).await?;
        }

        for (league, fixture, rating) in self.matches {
            setup
                .football()
                .insert_match(&league, &fixture, rating)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so a test can queue an error response ahead of a
        // shortcut serving the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (code, teams, expected) in self.teams_endpoints {
            mocks.push(setup.football().create_teams_endpoint(&code, teams, expected));
        }

        for (code, rows, expected) in self.standings_endpoints {
            let rows: Vec<(i64, &str, &str)> = rows
                .iter()
                .map(|(id, name, short)| (*id, name.as_str(), short.as_str()))
                .collect();
            mocks.push(
                setup
                    .football()
                    .create_standings_endpoint(&code, &rows, expected),
            );
        }

        for (fixtures, expected) in self.matches_endpoints {
            mocks.push(setup.football().create_matches_endpoint(&fixtures, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
