use chrono::{DateTime, Utc};
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::{db::MatchModel, feed::STATUS_FINISHED, fixture::Fixture};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fixture or refreshes the stored copy keyed by its feed identifier.
    ///
    /// `rating` and `created_at` are never touched on conflict, a stored rating survives
    /// re-ingestion until a scoring pass replaces it.
    pub async fn upsert(&self, fixture: Fixture) -> Result<MatchModel, DbErr> {
        let now = Utc::now().naive_utc();
        let fixture = entity::football_match::ActiveModel {
            match_id: ActiveValue::Set(fixture.match_id),
            competition: ActiveValue::Set(fixture.competition),
            stage: ActiveValue::Set(fixture.stage),
            home_team_id: ActiveValue::Set(fixture.home.id),
            home_team_name: ActiveValue::Set(fixture.home.name),
            away_team_id: ActiveValue::Set(fixture.away.id),
            away_team_name: ActiveValue::Set(fixture.away.name),
            utc_date: ActiveValue::Set(fixture.utc_date.naive_utc()),
            status: ActiveValue::Set(fixture.status),
            home_score: ActiveValue::Set(fixture.home_score),
            away_score: ActiveValue::Set(fixture.away_score),
            winner: ActiveValue::Set(fixture.winner),
            rating: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::FootballMatch::insert(fixture)
            .on_conflict(
                OnConflict::column(entity::football_match::Column::MatchId)
                    .update_columns([
                        entity::football_match::Column::Competition,
                        entity::football_match::Column::Stage,
                        entity::football_match::Column::HomeTeamId,
                        entity::football_match::Column::HomeTeamName,
                        entity::football_match::Column::AwayTeamId,
                        entity::football_match::Column::AwayTeamName,
                        entity::football_match::Column::UtcDate,
                        entity::football_match::Column::Status,
                        entity::football_match::Column::HomeScore,
                        entity::football_match::Column::AwayScore,
                        entity::football_match::Column::Winner,
                        entity::football_match::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Stores the rating produced by a scoring pass.
    ///
    /// # Returns
    /// - `Ok(true)` - The fixture exists and its rating was written
    /// - `Ok(false)` - No fixture with that identifier is stored
    pub async fn update_rating(&self, match_id: i64, rating: f64) -> Result<bool, DbErr> {
        let result = entity::prelude::FootballMatch::update_many()
            .col_expr(entity::football_match::Column::Rating, Expr::value(rating))
            .col_expr(
                entity::football_match::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::football_match::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_by_match_id(&self, match_id: i64) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::FootballMatch::find()
            .filter(entity::football_match::Column::MatchId.eq(match_id))
            .one(self.db)
            .await
    }

    /// Last `limit` finished fixtures of a team that kicked off before `before`, most recent
    /// first.
    pub async fn get_recent_finished(
        &self,
        team_id: i64,
        before: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::FootballMatch::find()
            .filter(
                Condition::any()
                    .add(entity::football_match::Column::HomeTeamId.eq(team_id))
                    .add(entity::football_match::Column::AwayTeamId.eq(team_id)),
            )
            .filter(entity::football_match::Column::Status.eq(STATUS_FINISHED))
            .filter(entity::football_match::Column::UtcDate.lt(before.naive_utc()))
            .order_by_desc(entity::football_match::Column::UtcDate)
            .limit(limit)
            .all(self.db)
            .await
    }
}
