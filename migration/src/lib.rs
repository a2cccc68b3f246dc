pub use sea_orm_migration::prelude::*;

mod m20251101_000001_team;
mod m20251101_000002_standing;
mod m20251101_000003_football_match;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_team::Migration),
            Box::new(m20251101_000002_standing::Migration),
            Box::new(m20251101_000003_football_match::Migration),
        ]
    }
}
