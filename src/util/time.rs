//! Date window calculations for the matches job.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::Error;

/// Calculates the inclusive date window the matches job requests fixtures for.
///
/// The window starts on the UTC calendar day of `now` and ends `days` days later, so a
/// fixture kicking off late in the evening of the last day is still included.
///
/// # Arguments
/// - `now` - Current UTC timestamp
/// - `days` - Number of days ahead of today to include, at least 1
///
/// # Returns
/// - `Ok((NaiveDate, NaiveDate))` - First and last day of the window, both inclusive
/// - `Err(Error::ParseError)` - `days` is not positive or the end date is out of range
///
/// # Example
/// ```ignore
/// // At 2025-05-27 18:00 UTC with a 7 day window
/// let (from, to) = match_window(now, 7)?;
/// // from == 2025-05-27, to == 2025-06-03
/// ```
pub fn match_window(now: DateTime<Utc>, days: i64) -> Result<(NaiveDate, NaiveDate), Error> {
    if days < 1 {
        return Err(Error::ParseError(format!(
            "match window must span at least one day, got {}",
            days
        )));
    }

    let out_of_range =
        || Error::ParseError(format!("match window of {} days is out of range", days));

    let from = now.date_naive();
    let to = Duration::try_days(days)
        .and_then(|span| from.checked_add_signed(span))
        .ok_or_else(out_of_range)?;

    Ok((from, to))
}
