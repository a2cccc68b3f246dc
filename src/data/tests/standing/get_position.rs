//! Tests for StandingRepository::get_position and get_team_ids methods.

use super::*;

#[tokio::test]
async fn finds_position_within_league() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Standing)
        .with_league_table("PremierLeague", &[(64, "Liverpool FC"), (57, "Arsenal FC")])
        .build()
        .await?;

    let repo = StandingRepository::new(&test.db);

    assert_eq!(repo.get_position("PremierLeague", 57).await?, Some(2));
    assert_eq!(repo.get_position("LaLiga", 57).await?, None);
    assert_eq!(repo.get_position("PremierLeague", 1).await?, None);

    Ok(())
}

#[tokio::test]
async fn lists_team_ids_in_position_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Standing)
        .with_league_table("SerieA", &[(113, "SSC Napoli"), (108, "Inter"), (98, "AC Milan")])
        .build()
        .await?;

    let repo = StandingRepository::new(&test.db);

    assert_eq!(repo.get_team_ids("SerieA").await?, vec![113, 108, 98]);
    assert!(repo.get_team_ids("Ligue1").await?.is_empty());

    Ok(())
}
