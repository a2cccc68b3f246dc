//! Cache key prefixes shared with the artifact renderers.

/// Prefix of the rendered schedule of the highest rated upcoming matches.
pub const TOP_MATCHES_IMAGE: &str = "top_matches_image";

/// Prefix of the rendered schedule of every upcoming match.
pub const ALL_MATCHES_IMAGE: &str = "all_matches_image";

const TABLE_IMAGE: &str = "table_image";

/// Prefix of the rendered league table of a league collection.
///
/// e.g. `table_image:PremierLeague`
pub fn table_image(collection: &str) -> String {
    format!("{}:{}", TABLE_IMAGE, collection)
}

/// Prefixes dropped after the matches job stored new fixtures.
pub fn schedule_images() -> [&'static str; 2] {
    [TOP_MATCHES_IMAGE, ALL_MATCHES_IMAGE]
}
