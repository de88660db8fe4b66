//! Plain-text report formatters
//!
//! Every formatter is a pure function from typed API data to an [`Outcome`]:
//! `Ok` with the report, or `NotFound` with the sentence for an empty result.
//! Dates are rendered in UTC using en-US conventions.

pub mod competitions;
pub mod matches;
pub mod teams;

pub use competitions::{
    competition_not_found, format_competitions, format_standings, format_top_scorers,
};
pub use matches::{
    format_live_matches, format_matches_by_date, format_next_match, format_team_results,
};
pub use teams::{format_team_form, format_team_info, format_team_squad, team_not_found};

use crate::models::ScoreLine;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

fn parse_utc(utc_date: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(utc_date)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `M/D/YYYY`, or the raw input when it is not an RFC 3339 timestamp
pub fn short_date(utc_date: &str) -> String {
    match parse_utc(utc_date) {
        Some(dt) => format!("{}/{}/{}", dt.month(), dt.day(), dt.year()),
        None => utc_date.to_string(),
    }
}

/// `hh:mm AM`, or `--:--` when the timestamp cannot be parsed
pub fn kickoff_time(utc_date: &str) -> String {
    match parse_utc(utc_date) {
        Some(dt) => dt.format("%I:%M %p").to_string(),
        None => "--:--".to_string(),
    }
}

/// `Saturday, January 20, 2024` for a `YYYY-MM-DD` key
pub fn long_date(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date_key.to_string(),
    }
}

/// `home-away` with `-` standing in for an unplayed side
pub fn score_or_dash(line: &ScoreLine) -> String {
    let side = |goals: Option<u32>| goals.map_or_else(|| "-".to_string(), |g| g.to_string());
    format!("{}-{}", side(line.home), side(line.away))
}

/// Goal difference with an explicit `+` for zero and positive values
pub fn signed(value: i32) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-01-20T15:00:00Z"), "1/20/2024");
        assert_eq!(short_date("2024-11-05T20:00:00Z"), "11/5/2024");
    }

    #[test]
    fn test_short_date_unparseable_passthrough() {
        assert_eq!(short_date("soon"), "soon");
    }

    #[test]
    fn test_kickoff_time() {
        assert_eq!(kickoff_time("2024-01-20T15:00:00Z"), "03:00 PM");
        assert_eq!(kickoff_time("2024-01-20T09:30:00Z"), "09:30 AM");
        assert_eq!(kickoff_time("nope"), "--:--");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2024-01-20"), "Saturday, January 20, 2024");
        assert_eq!(long_date("2024-01-05"), "Friday, January 5, 2024");
    }

    #[test]
    fn test_score_or_dash() {
        let played = ScoreLine {
            home: Some(2),
            away: Some(0),
        };
        assert_eq!(score_or_dash(&played), "2-0");
        assert_eq!(score_or_dash(&ScoreLine::default()), "---");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(5), "+5");
        assert_eq!(signed(-3), "-3");
        assert_eq!(signed(0), "+0");
    }
}
