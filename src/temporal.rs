// ⏰ Birth-Date Estimation
// Derives an approximate birth date from age, a season word and the arrival date.

use crate::date::{format_iso_date, parse_iso_date, CalendarDate};
use crate::error::{Result, ZooError};
use crate::text::to_lower;

/// Representative (month, day) for a season word, if it is one we know
pub fn season_to_month_day(season: &str) -> Option<(u32, u32)> {
    match to_lower(season).as_str() {
        "spring" => Some((3, 15)),
        "summer" => Some((6, 15)),
        "fall" | "autumn" => Some((9, 15)),
        "winter" => Some((12, 15)),
        _ => None,
    }
}

/// Birth year is `arrival year - age`. Month/day come from the season, or
/// from the arrival date itself when the season is not recognized.
///
/// # Examples:
/// ```
/// use zoo_keeper::temporal::estimate_birth_date;
/// assert_eq!(estimate_birth_date(5, "winter", "2024-04-02").unwrap(), "2019-12-15");
/// assert_eq!(estimate_birth_date(5, "martian", "2024-04-02").unwrap(), "2019-04-02");
/// ```
pub fn estimate_birth_date(age: u32, season: &str, arrival_date: &str) -> Result<String> {
    let arrival = parse_iso_date(arrival_date)?;
    let year = i32::try_from(age)
        .ok()
        .and_then(|age| arrival.year.checked_sub(age))
        .ok_or_else(|| {
            ZooError::format(format!("Age {} out of range for arrival {}", age, arrival_date))
        })?;

    let (month, day) = season_to_month_day(season).unwrap_or((arrival.month, arrival.day));

    Ok(format_iso_date(&CalendarDate::new(year, month, day)))
}
