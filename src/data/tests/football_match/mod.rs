use chrono::{DateTime, Duration, TimeZone, Utc};
use matchday_test_utils::prelude::*;

use crate::{
    data::football_match::MatchRepository,
    model::fixture::{Fixture, FixtureSide},
};

mod update_rating;
mod upsert;

fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 18, 14, 0, 0).unwrap()
}

fn fixture(match_id: i64, status: &str) -> Fixture {
    Fixture {
        match_id,
        competition: "PremierLeague".to_string(),
        stage: Some("REGULAR_SEASON".to_string()),
        home: FixtureSide {
            id: 66,
            name: "Manchester United FC".to_string(),
        },
        away: FixtureSide {
            id: 65,
            name: "Manchester City FC".to_string(),
        },
        utc_date: kickoff(),
        status: status.to_string(),
        home_score: None,
        away_score: None,
        winner: None,
    }
}
