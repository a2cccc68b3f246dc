//! Database rows inserted directly, bypassing the sync jobs.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

use super::{FixtureMatch, FootballFixtures};

impl<'a> FootballFixtures<'a> {
    pub async fn insert_team(
        &self,
        league: &str,
        team_id: i64,
        name: &str,
        short_name: &str,
    ) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now().naive_utc();
        entity::team::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            league: ActiveValue::Set(league.to_string()),
            name: ActiveValue::Set(name.to_string()),
            short_name: ActiveValue::Set(short_name.to_string()),
            tla: ActiveValue::Set(None),
            founded: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await
    }

    pub async fn insert_standing(
        &self,
        league: &str,
        position: i32,
        team_id: i64,
        name: &str,
    ) -> Result<entity::standing::Model, DbErr> {
        entity::standing::ActiveModel {
            league: ActiveValue::Set(league.to_string()),
            position: ActiveValue::Set(position),
            team_id: ActiveValue::Set(team_id),
            team_name: ActiveValue::Set(name.to_string()),
            team_short_name: ActiveValue::Set(name.to_string()),
            played_games: ActiveValue::Set(0),
            won: ActiveValue::Set(0),
            draw: ActiveValue::Set(0),
            lost: ActiveValue::Set(0),
            points: ActiveValue::Set(0),
            goals_for: ActiveValue::Set(0),
            goals_against: ActiveValue::Set(0),
            goal_difference: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await
    }

    /// Inserts a league table, positions following the order of `teams`.
    pub async fn insert_table(&self, league: &str, teams: &[(i64, &str)]) -> Result<(), DbErr> {
        for (i, (team_id, name)) in teams.iter().enumerate() {
            self.insert_standing(league, i as i32 + 1, *team_id, name)
                .await?;
        }
        Ok(())
    }

    pub async fn insert_match(
        &self,
        league: &str,
        fixture: &FixtureMatch,
        rating: Option<f64>,
    ) -> Result<entity::football_match::Model, DbErr> {
        let now = Utc::now().naive_utc();
        entity::football_match::ActiveModel {
            match_id: ActiveValue::Set(fixture.match_id),
            competition: ActiveValue::Set(league.to_string()),
            stage: ActiveValue::Set(fixture.stage.clone()),
            home_team_id: ActiveValue::Set(fixture.home.0),
            home_team_name: ActiveValue::Set(fixture.home.1.clone()),
            away_team_id: ActiveValue::Set(fixture.away.0),
            away_team_name: ActiveValue::Set(fixture.away.1.clone()),
            utc_date: ActiveValue::Set(fixture.utc_date.naive_utc()),
            status: ActiveValue::Set(fixture.status.clone()),
            home_score: ActiveValue::Set(fixture.home_score),
            away_score: ActiveValue::Set(fixture.away_score),
            winner: ActiveValue::Set(fixture.winner.clone()),
            rating: ActiveValue::Set(rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await
    }
}
