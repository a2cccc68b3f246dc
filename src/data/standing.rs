use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::{db::StandingModel, feed::FeedStanding};

pub struct StandingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StandingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the league table of a league.
    ///
    /// # Arguments
    /// - `league` - League key the table belongs to
    /// - `rows` - Complete table, positions already validated by the caller
    ///
    /// # Notes
    /// - Pass a transaction as the connection so readers never observe a partial table
    pub async fn replace_league(
        &self,
        league: &str,
        rows: Vec<FeedStanding>,
    ) -> Result<Vec<StandingModel>, DbErr> {
        entity::prelude::Standing::delete_many()
            .filter(entity::standing::Column::League.eq(league))
            .exec(self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let rows = rows.into_iter().map(|row| entity::standing::ActiveModel {
            league: ActiveValue::Set(league.to_string()),
            position: ActiveValue::Set(row.position),
            team_id: ActiveValue::Set(row.team.id),
            team_short_name: ActiveValue::Set(
                row.team.short_name.unwrap_or_else(|| row.team.name.clone()),
            ),
            team_name: ActiveValue::Set(row.team.name),
            played_games: ActiveValue::Set(row.played_games),
            won: ActiveValue::Set(row.won),
            draw: ActiveValue::Set(row.draw),
            lost: ActiveValue::Set(row.lost),
            points: ActiveValue::Set(row.points),
            goals_for: ActiveValue::Set(row.goals_for),
            goals_against: ActiveValue::Set(row.goals_against),
            goal_difference: ActiveValue::Set(row.goal_difference),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Standing::insert_many(rows)
            .exec_with_returning(self.db)
            .await
    }

    /// League table ordered by position.
    pub async fn find_by_league(&self, league: &str) -> Result<Vec<StandingModel>, DbErr> {
        entity::prelude::Standing::find()
            .filter(entity::standing::Column::League.eq(league))
            .order_by_asc(entity::standing::Column::Position)
            .all(self.db)
            .await
    }

    /// Table position of a team within a league.
    pub async fn get_position(&self, league: &str, team_id: i64) -> Result<Option<i32>, DbErr> {
        entity::prelude::Standing::find()
            .select_only()
            .column(entity::standing::Column::Position)
            .filter(entity::standing::Column::League.eq(league))
            .filter(entity::standing::Column::TeamId.eq(team_id))
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Identifiers of every team ranked in a league, ordered by position.
    pub async fn get_team_ids(&self, league: &str) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Standing::find()
            .select_only()
            .column(entity::standing::Column::TeamId)
            .filter(entity::standing::Column::League.eq(league))
            .order_by_asc(entity::standing::Column::Position)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}
