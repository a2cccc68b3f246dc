use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_LEAGUE_TEAM_ID: &str = "idx_team_league_team_id";
static IDX_TEAM_LEAGUE_NAME: &str = "idx_team_league_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(big_integer(Team::TeamId))
                    .col(string(Team::League))
                    .col(string(Team::Name))
                    .col(string(Team::ShortName))
                    .col(string_null(Team::Tla))
                    .col(integer_null(Team::Founded))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_LEAGUE_TEAM_ID)
                    .table(Team::Table)
                    .col(Team::League)
                    .col(Team::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_LEAGUE_NAME)
                    .table(Team::Table)
                    .col(Team::League)
                    .col(Team::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_LEAGUE_NAME)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_LEAGUE_TEAM_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    TeamId,
    League,
    Name,
    ShortName,
    Tla,
    Founded,
    CreatedAt,
    UpdatedAt,
}
