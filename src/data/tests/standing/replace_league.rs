//! Tests for StandingRepository::replace_league method.

use super::*;

/// Expect exactly the new table to remain after a refresh
#[tokio::test]
async fn replaces_whole_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Standing)
        .with_league_table("Bundesliga", &[(1, "Old One"), (2, "Old Two"), (3, "Old Three")])
        .with_league_table("SerieA", &[(108, "Inter")])
        .build()
        .await?;

    let repo = StandingRepository::new(&test.db);
    repo.replace_league(
        "Bundesliga",
        vec![feed_row(1, 5, "FC Bayern München"), feed_row(2, 4, "Borussia Dortmund")],
    )
    .await?;

    let table = repo.find_by_league("Bundesliga").await?;
    let positions: Vec<i32> = table.iter().map(|row| row.position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert_eq!(table[0].team_id, 5);
    assert_eq!(repo.find_by_league("SerieA").await?.len(), 1);

    Ok(())
}

/// Expect the replace to roll back with the surrounding transaction
#[tokio::test]
async fn rolls_back_with_transaction() -> Result<(), TestError> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_table(entity::prelude::Standing)
        .with_league_table(
            "Ligue1",
            &[(524, "Paris Saint-Germain FC"), (516, "Olympique de Marseille")],
        )
        .build()
        .await?;

    let txn = test.db.begin().await?;
    StandingRepository::new(&txn)
        .replace_league("Ligue1", vec![feed_row(1, 1, "Someone Else")])
        .await?;
    txn.rollback().await?;

    let table = StandingRepository::new(&test.db).find_by_league("Ligue1").await?;
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team_id, 524);

    Ok(())
}
