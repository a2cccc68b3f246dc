use sea_orm_migration::{prelude::*, schema::*};

static IDX_STANDING_LEAGUE_TEAM_ID: &str = "idx_standing_league_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Standing::Table)
                    .if_not_exists()
                    .col(pk_auto(Standing::Id))
                    .col(string(Standing::League))
                    .col(integer(Standing::Position))
                    .col(big_integer(Standing::TeamId))
                    .col(string(Standing::TeamName))
                    .col(string(Standing::TeamShortName))
                    .col(integer(Standing::PlayedGames))
                    .col(integer(Standing::Won))
                    .col(integer(Standing::Draw))
                    .col(integer(Standing::Lost))
                    .col(integer(Standing::Points))
                    .col(integer(Standing::GoalsFor))
                    .col(integer(Standing::GoalsAgainst))
                    .col(integer(Standing::GoalDifference))
                    .col(timestamp(Standing::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STANDING_LEAGUE_TEAM_ID)
                    .table(Standing::Table)
                    .col(Standing::League)
                    .col(Standing::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STANDING_LEAGUE_TEAM_ID)
                    .table(Standing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Standing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Standing {
    Table,
    Id,
    League,
    Position,
    TeamId,
    TeamName,
    TeamShortName,
    PlayedGames,
    Won,
    Draw,
    Lost,
    Points,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    CreatedAt,
}
