use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use super::{GameHistory, HistoryError};

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO-8601 date-time. Offset-less values are taken as UTC and a
/// bare date as midnight UTC.
pub fn parse_completed_at(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Completion time of a game, or `MalformedTimestamp` naming the record
pub fn completed_at_of(game: &GameHistory) -> Result<DateTime<FixedOffset>, HistoryError> {
    parse_completed_at(&game.completed_at).ok_or_else(|| HistoryError::MalformedTimestamp {
        game_id: game.id.clone(),
        value: game.completed_at.clone(),
    })
}
