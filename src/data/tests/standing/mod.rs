use matchday_test_utils::prelude::*;

use crate::{
    data::standing::StandingRepository,
    model::feed::{FeedStanding, FeedTeamRef},
};

mod get_position;
mod replace_league;

fn feed_row(position: i32, team_id: i64, name: &str) -> FeedStanding {
    FeedStanding {
        position,
        team: FeedTeamRef {
            id: team_id,
            name: name.to_string(),
            short_name: Some(name.to_string()),
        },
        played_games: 1,
        won: 1,
        draw: 0,
        lost: 0,
        points: 3,
        goals_for: 1,
        goals_against: 0,
        goal_difference: 1,
    }
}
