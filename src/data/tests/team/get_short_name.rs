//! Tests for TeamRepository::get_short_name method.

use super::*;

#[tokio::test]
async fn finds_short_name_within_league() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_team("LaLiga", 559, "Sevilla FC", "Sevilla")
        .with_team("Ligue1", 524, "Paris Saint-Germain FC", "PSG")
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);

    assert_eq!(
        repo.get_short_name("LaLiga", "Sevilla FC").await?,
        Some("Sevilla".to_string())
    );
    assert_eq!(
        repo.get_short_name("Ligue1", "Paris Saint-Germain FC").await?,
        Some("PSG".to_string())
    );

    Ok(())
}

/// Expect None for a name unknown to the league, even when another league knows it
#[tokio::test]
async fn returns_none_outside_league() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_team("LaLiga", 559, "Sevilla FC", "Sevilla")
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);

    assert_eq!(repo.get_short_name("PremierLeague", "Sevilla FC").await?, None);
    assert_eq!(repo.get_short_name("LaLiga", "Sevilla").await?, None);

    Ok(())
}
