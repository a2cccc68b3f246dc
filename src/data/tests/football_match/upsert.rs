//! Tests for MatchRepository::upsert method.

use super::*;

#[tokio::test]
async fn inserts_new_fixture() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FootballMatch)
        .build()
        .await?;

    let repo = MatchRepository::new(&test.db);
    let stored = repo.upsert(fixture(1, "TIMED")).await?;

    assert_eq!(stored.match_id, 1);
    assert_eq!(stored.competition, "PremierLeague");
    assert_eq!(stored.rating, None);

    Ok(())
}

/// Expect a re-ingested fixture to update in place, keeping created_at and the rating
#[tokio::test]
async fn updates_existing_fixture_keeping_rating() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FootballMatch)
        .build()
        .await?;

    let repo = MatchRepository::new(&test.db);
    let initial = repo.upsert(fixture(1, "TIMED")).await?;
    repo.update_rating(1, 0.64).await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let mut finished = fixture(1, "FINISHED");
    finished.home_score = Some(1);
    finished.away_score = Some(1);
    finished.winner = Some("DRAW".to_string());
    let latest = repo.upsert(finished).await?;

    assert_eq!(latest.id, initial.id);
    assert_eq!(latest.status, "FINISHED");
    assert_eq!(latest.home_score, Some(1));
    assert_eq!(latest.rating, Some(0.64));
    assert_eq!(latest.created_at, initial.created_at);
    assert!(latest.updated_at > initial.updated_at);

    Ok(())
}

/// Expect repeated ingestion of the same fixtures to leave no duplicate rows
#[tokio::test]
async fn does_not_duplicate_rows() -> Result<(), TestError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::FootballMatch)
        .build()
        .await?;

    let repo = MatchRepository::new(&test.db);
    for _ in 0..3 {
        repo.upsert(fixture(1, "TIMED")).await?;
        repo.upsert(fixture(2, "TIMED")).await?;
    }

    let count = entity::prelude::FootballMatch::find().count(&test.db).await?;
    assert_eq!(count, 2);

    Ok(())
}
