//! Input validation and limit clamping
//!
//! Checks that run before any request is made. Failures are returned as
//! [`Outcome::ValidationError`] so callers can hand them straight back.

use crate::outcome::Outcome;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Roster page size used for name resolution
pub const DEFAULT_ROSTER_LIMIT: u32 = 100;
pub const DEFAULT_RESULTS_LIMIT: u32 = 5;
pub const MAX_RESULTS_LIMIT: u32 = 20;
pub const DEFAULT_FORM_MATCHES: u32 = 5;
pub const MAX_FORM_MATCHES: u32 = 10;
pub const DEFAULT_SCORERS_LIMIT: u32 = 10;
pub const MAX_SCORERS_LIMIT: u32 = 20;
pub const MAX_DATE_MATCHES: u32 = 50;
pub const MIN_QUERY_LEN: usize = 2;

pub const DATE_FORMAT_ERROR: &str = "Error: Dates must be in YYYY-MM-DD format (e.g., 2024-01-15)";
pub const DATE_ORDER_ERROR: &str = "Error: dateFrom must not be after dateTo";

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"))
}

/// Clamp a requested limit into `[1, max]`, using `default` when absent
pub fn clamp_limit(limit: Option<i64>, default: u32, max: u32) -> u32 {
    match limit {
        None => default,
        Some(n) => n.clamp(1, i64::from(max)) as u32,
    }
}

/// Trim a team name and require at least [`MIN_QUERY_LEN`] characters
pub fn validate_team_name(name: &str) -> Result<String, Outcome> {
    let trimmed = name.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Err(Outcome::ValidationError(
            "Error: Team name must be at least 2 characters long".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim a competition code and require at least [`MIN_QUERY_LEN`] characters
pub fn validate_competition_code(code: &str) -> Result<String, Outcome> {
    let trimmed = code.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Err(Outcome::ValidationError(
            "Error: Competition code must be at least 2 characters long".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a `YYYY-MM-DD` string into a calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, Outcome> {
    if !date_regex().is_match(input) {
        return Err(Outcome::ValidationError(DATE_FORMAT_ERROR.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| Outcome::ValidationError(DATE_FORMAT_ERROR.to_string()))
}

/// Validate both ends of a date range
pub fn validate_date_range(date_from: &str, date_to: &str) -> Result<(NaiveDate, NaiveDate), Outcome> {
    let from = parse_date(date_from)?;
    let to = parse_date(date_to)?;
    if from > to {
        return Err(Outcome::ValidationError(DATE_ORDER_ERROR.to_string()));
    }
    Ok((from, to))
}
