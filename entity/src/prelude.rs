pub use super::football_match::Entity as FootballMatch;
pub use super::standing::Entity as Standing;
pub use super::team::Entity as Team;
