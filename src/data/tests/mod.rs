mod football_match;
mod standing;
mod team;
