//! Tests for LeagueResolver::refresh method.

use super::*;

/// Expect the index to be built once and only change on refresh
#[tokio::test]
async fn picks_up_new_standings_on_refresh() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_football_tables()
        .with_league_table("PremierLeague", &[(57, "Arsenal FC")])
        .build()
        .await?;

    let resolver = resolver(&test);
    assert_eq!(resolver.resolve_league(351).await.unwrap(), None);

    test.football()
        .insert_standing("PremierLeague", 2, 351, "Nottingham Forest FC")
        .await?;

    // Served from the index built on first use
    assert_eq!(resolver.resolve_league(351).await.unwrap(), None);

    let size = resolver.refresh().await.unwrap();

    assert_eq!(size, 2);
    assert_eq!(
        resolver.resolve_league(351).await.unwrap(),
        Some("PremierLeague".to_string())
    );

    Ok(())
}

/// Expect clones to share the same index
#[tokio::test]
async fn shares_index_between_clones() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_football_tables()
        .build()
        .await?;

    let resolver = resolver(&test);
    let clone = resolver.clone();
    assert_eq!(clone.resolve_league(86).await.unwrap(), None);

    test.football()
        .insert_standing("LaLiga", 1, 86, "Real Madrid CF")
        .await?;
    resolver.refresh().await.unwrap();

    assert_eq!(
        clone.resolve_league(86).await.unwrap(),
        Some("LaLiga".to_string())
    );

    Ok(())
}
