use sea_orm_migration::{prelude::*, schema::*};

static IDX_FOOTBALL_MATCH_HOME_TEAM: &str = "idx_football_match_home_team_id_utc_date";
static IDX_FOOTBALL_MATCH_AWAY_TEAM: &str = "idx_football_match_away_team_id_utc_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FootballMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(FootballMatch::Id))
                    .col(big_integer_uniq(FootballMatch::MatchId))
                    .col(string(FootballMatch::Competition))
                    .col(string_null(FootballMatch::Stage))
                    .col(big_integer(FootballMatch::HomeTeamId))
                    .col(string(FootballMatch::HomeTeamName))
                    .col(big_integer(FootballMatch::AwayTeamId))
                    .col(string(FootballMatch::AwayTeamName))
                    .col(timestamp(FootballMatch::UtcDate))
                    .col(string(FootballMatch::Status))
                    .col(integer_null(FootballMatch::HomeScore))
                    .col(integer_null(FootballMatch::AwayScore))
                    .col(string_null(FootballMatch::Winner))
                    .col(double_null(FootballMatch::Rating))
                    .col(timestamp(FootballMatch::CreatedAt))
                    .col(timestamp(FootballMatch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOTBALL_MATCH_HOME_TEAM)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::HomeTeamId)
                    .col(FootballMatch::UtcDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOTBALL_MATCH_AWAY_TEAM)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::AwayTeamId)
                    .col(FootballMatch::UtcDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOTBALL_MATCH_AWAY_TEAM)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOTBALL_MATCH_HOME_TEAM)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FootballMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FootballMatch {
    Table,
    Id,
    MatchId,
    Competition,
    Stage,
    HomeTeamId,
    HomeTeamName,
    AwayTeamId,
    AwayTeamName,
    UtcDate,
    Status,
    HomeScore,
    AwayScore,
    Winner,
    Rating,
    CreatedAt,
    UpdatedAt,
}
