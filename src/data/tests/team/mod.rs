use matchday_test_utils::prelude::*;

use crate::{data::team::TeamRepository, model::feed::FeedTeam};

mod get_short_name;
mod replace_league;

fn feed_team(id: i64, name: &str, short_name: Option<&str>) -> FeedTeam {
    FeedTeam {
        id,
        name: name.to_string(),
        short_name: short_name.map(str::to_string),
        tla: None,
        founded: None,
    }
}
