use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::{db::TeamModel, feed::FeedTeam};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces every team of a league with the provided teams.
    ///
    /// # Arguments
    /// - `league` - League key the teams belong to
    /// - `teams` - Normalized teams, replacing whatever the league held before
    ///
    /// # Notes
    /// - Pass a transaction as the connection so readers never observe a partial league
    pub async fn replace_league(
        &self,
        league: &str,
        teams: Vec<FeedTeam>,
    ) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::Team::delete_many()
            .filter(entity::team::Column::League.eq(league))
            .exec(self.db)
            .await?;

        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let teams = teams.into_iter().map(|team| entity::team::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            league: ActiveValue::Set(league.to_string()),
            short_name: ActiveValue::Set(team.short_name.unwrap_or_else(|| team.name.clone())),
            name: ActiveValue::Set(team.name),
            tla: ActiveValue::Set(team.tla),
            founded: ActiveValue::Set(team.founded),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Team::insert_many(teams)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_league(&self, league: &str) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::League.eq(league))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    /// Short name of the team with the exact display name `name` within a league.
    pub async fn get_short_name(&self, league: &str, name: &str) -> Result<Option<String>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::ShortName)
            .filter(entity::team::Column::League.eq(league))
            .filter(entity::team::Column::Name.eq(name))
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    pub async fn count_by_league(&self, league: &str) -> Result<u64, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::League.eq(league))
            .count(self.db)
            .await
    }
}
