//! Tests for MatchRepository::update_rating method.

use super::*;

#[tokio::test]
async fn writes_rating() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FootballMatch)
        .build()
        .await?;

    let repo = MatchRepository::new(&test.db);
    repo.upsert(fixture(7, "TIMED")).await?;

    assert!(repo.update_rating(7, 0.5).await?);
    let stored = repo.get_by_match_id(7).await?.expect("fixture stored");
    assert_eq!(stored.rating, Some(0.5));

    Ok(())
}

#[tokio::test]
async fn reports_unknown_fixture() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FootballMatch)
        .build()
        .await?;

    let repo = MatchRepository::new(&test.db);

    assert!(!repo.update_rating(404, 0.5).await?);

    Ok(())
}
