//! Tests for TeamRepository::replace_league method.

use super::*;

/// Expect every team of the league to be inserted
#[tokio::test]
async fn inserts_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    let created = repo
        .replace_league(
            "PremierLeague",
            vec![
                feed_team(57, "Arsenal FC", Some("Arsenal")),
                feed_team(73, "Tottenham Hotspur FC", Some("Tottenham")),
            ],
        )
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(repo.count_by_league("PremierLeague").await?, 2);

    Ok(())
}

/// Expect the previous teams of the league to be removed and other leagues left alone
#[tokio::test]
async fn replaces_only_target_league() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_team("PremierLeague", 1, "Relegated FC", "Relegated")
        .with_team("LaLiga", 86, "Real Madrid CF", "Real Madrid")
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    repo.replace_league("PremierLeague", vec![feed_team(57, "Arsenal FC", Some("Arsenal"))])
        .await?;

    let premier_league = repo.find_by_league("PremierLeague").await?;
    assert_eq!(premier_league.len(), 1);
    assert_eq!(premier_league[0].team_id, 57);
    assert_eq!(repo.count_by_league("LaLiga").await?, 1);

    Ok(())
}

/// Expect replacing twice with the same teams to leave no duplicates
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    let teams = vec![
        feed_team(57, "Arsenal FC", Some("Arsenal")),
        feed_team(61, "Chelsea FC", Some("Chelsea")),
    ];
    repo.replace_league("PremierLeague", teams.clone()).await?;
    repo.replace_league("PremierLeague", teams).await?;

    assert_eq!(repo.count_by_league("PremierLeague").await?, 2);

    Ok(())
}

/// Expect a missing short name to fall back to the full name
#[tokio::test]
async fn falls_back_to_full_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    let created = repo
        .replace_league("SerieA", vec![feed_team(99, "ACF Fiorentina", None)])
        .await?;

    assert_eq!(created[0].short_name, "ACF Fiorentina");

    Ok(())
}
