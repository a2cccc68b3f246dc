//! Tests for StandingSyncService::sync method.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::{
    data::standing::StandingRepository,
    model::{
        feed::{FeedStanding, FeedTeamRef},
        league::League,
    },
    service::sync::{
        standings::{covers_league, validate_positions},
        StandingSyncService,
    },
};

fn premier_league_rows() -> Vec<(i64, String, String)> {
    (1..=20)
        .map(|i| (100 + i, format!("Club {} FC", i), format!("Club {}", i)))
        .collect()
}

fn as_refs(rows: &[(i64, String, String)]) -> Vec<(i64, &str, &str)> {
    rows.iter()
        .map(|(id, name, short)| (*id, name.as_str(), short.as_str()))
        .collect()
}

/// Expect exactly N rows with positions 1..N after a refresh
#[tokio::test]
async fn replaces_full_table() -> Result<(), TestError> {
    let rows = premier_league_rows();
    let test = TestBuilder::new()
        .with_football_tables()
        .with_league_table("PremierLeague", &[(1, "Old One"), (2, "Old Two"), (3, "Old Three")])
        .with_standings_endpoint("PL", &as_refs(&rows), 1)
        .build()
        .await?;
    let state = sync_state(&test, memory_cache());

    let report = StandingSyncService::new(&state).sync().await.unwrap();

    assert_eq!(report.refreshed, vec!["PremierLeague"]);
    let table = StandingRepository::new(&test.db)
        .find_by_league("PremierLeague")
        .await?;
    let positions: Vec<i32> = table.iter().map(|row| row.position).collect();
    assert_eq!(positions, (1..=20).collect::<Vec<i32>>());
    assert!(table.iter().all(|row| row.team_id > 100));

    Ok(())
}

/// Expect a table with a gap in its positions to be rejected and the stored one kept
#[tokio::test]
async fn rejects_non_contiguous_table() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_football_tables()
        .with_league_table("PremierLeague", &[(57, "Arsenal FC"), (64, "Liverpool FC")])
        .build()
        .await?;
    let body = json!({
        "standings": [{
            "type": "TOTAL",
            "table": [
                data::standing(1, 64, "Liverpool FC", "Liverpool"),
                data::standing(3, 57, "Arsenal FC", "Arsenal")
            ]
        }]
    });
    let _mock = test
        .football()
        .create_raw_standings_endpoint("PL", body, 1);
    let state = sync_state(&test, memory_cache());

    let report = StandingSyncService::new(&state).sync().await.unwrap();

    assert!(report.skipped.contains(&"PremierLeague".to_string()));
    let table = StandingRepository::new(&test.db)
        .find_by_league("PremierLeague")
        .await?;
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team_id, 57);

    Ok(())
}

/// Expect only the table images of refreshed leagues to be invalidated
#[tokio::test]
async fn invalidates_refreshed_table_images() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_standings_endpoint("PL", &[(57, "Arsenal FC", "Arsenal")], 1)
        .build()
        .await?;
    let cache = memory_cache();
    for key in [
        keys::table_image("PremierLeague"),
        keys::table_image("LaLiga"),
        keys::TOP_MATCHES_IMAGE.to_string(),
    ] {
        cache.set_bytes(&key, b"png", None).await.unwrap();
    }
    let state = sync_state(&test, cache.clone());

    StandingSyncService::new(&state).sync().await.unwrap();

    assert_eq!(
        cache.get_bytes(&keys::table_image("PremierLeague")).await.unwrap(),
        None
    );
    assert!(cache
        .get_bytes(&keys::table_image("LaLiga"))
        .await
        .unwrap()
        .is_some());
    assert!(cache
        .get_bytes(keys::TOP_MATCHES_IMAGE)
        .await
        .unwrap()
        .is_some());

    Ok(())
}

/// Expect a cache outage not to fail the job
#[tokio::test]
async fn tolerates_cache_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_standings_endpoint("PL", &[(57, "Arsenal FC", "Arsenal")], 1)
        .build()
        .await?;
    let state = sync_state(&test, Arc::new(UnavailableCache));

    let report = StandingSyncService::new(&state).sync().await.unwrap();

    assert_eq!(report.refreshed, vec!["PremierLeague"]);

    Ok(())
}

/// Expect the resolver to see the new tables once the job completes
#[tokio::test]
async fn refreshes_resolver() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_standings_endpoint("PD", &[(86, "Real Madrid CF", "Real Madrid")], 1)
        .build()
        .await?;
    let state = sync_state(&test, memory_cache());
    assert_eq!(state.resolver.resolve_league(86).await.unwrap(), None);

    StandingSyncService::new(&state).sync().await.unwrap();

    assert_eq!(
        state.resolver.resolve_league(86).await.unwrap(),
        Some("LaLiga".to_string())
    );

    Ok(())
}

/// Expect two runs over the same table to leave the same rows
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let rows = premier_league_rows();
    let test = TestBuilder::new()
        .with_football_tables()
        .with_standings_endpoint("PL", &as_refs(&rows), 2)
        .build()
        .await?;
    let state = sync_state(&test, memory_cache());

    StandingSyncService::new(&state).sync().await.unwrap();
    StandingSyncService::new(&state).sync().await.unwrap();

    test.assert_mocks();
    assert_eq!(entity::prelude::Standing::find().count(&test.db).await?, 20);

    Ok(())
}

fn row(position: i32) -> FeedStanding {
    FeedStanding {
        position,
        team: FeedTeamRef {
            id: position as i64,
            name: format!("Team {}", position),
            short_name: None,
        },
        played_games: 0,
        won: 0,
        draw: 0,
        lost: 0,
        points: 0,
        goals_for: 0,
        goals_against: 0,
        goal_difference: 0,
    }
}

fn three_team_league() -> League {
    League::new("Mini", "Mini League", "MINI", 3, false)
}

#[test]
fn validates_positions() {
    let league = three_team_league();

    assert!(validate_positions(&league, &[row(2), row(1), row(3)]).is_ok());
    assert!(validate_positions(&league, &[row(1), row(1)]).is_err());
    assert!(validate_positions(&league, &[row(2), row(3)]).is_err());
}

/// Expect a contiguous table shorter than the league to be kept but flagged
#[test]
fn flags_table_smaller_than_league() {
    let league = three_team_league();
    let short_table = [row(1), row(2)];

    assert!(validate_positions(&league, &short_table).is_ok());
    assert!(!covers_league(&league, &short_table));
    assert!(covers_league(&league, &[row(1), row(2), row(3)]));
}
