//! Match reports: next fixture, live scores, date ranges and team results

use super::{kickoff_time, long_date, score_or_dash, short_date};
use crate::models::Match;
use crate::outcome::Outcome;
use crate::results::classify_match;
use std::collections::BTreeMap;

/// Next scheduled fixture for a team
pub fn format_next_match(team_name: &str, next: Option<&Match>) -> Outcome {
    let Some(m) = next else {
        return Outcome::NotFound(format!(
            "No upcoming matches found for team '{team_name}'"
        ));
    };

    Outcome::Ok(format!(
        "Next match for {team_name}: {} vs {} on {}",
        m.home_team.display_name(),
        m.away_team.display_name(),
        short_date(&m.utc_date)
    ))
}

/// Matches currently in play
///
/// The score falls back from full time to half time to zero, and the minute
/// shows `HT` when the API does not send one.
pub fn format_live_matches(matches: &[Match]) -> Outcome {
    if matches.is_empty() {
        return Outcome::NotFound("No live matches currently playing".to_string());
    }

    let mut result = String::from("Live Matches:\n\n");
    for (idx, m) in matches.iter().enumerate() {
        let score = &m.score;
        let home = score.full_time.home.or(score.half_time.home).unwrap_or(0);
        let away = score.full_time.away.or(score.half_time.away).unwrap_or(0);
        let minute = m
            .minute
            .as_ref()
            .map_or_else(|| "HT".to_string(), |minute| minute.to_string());

        result.push_str(&format!(
            "{}. {} {home}-{away} {}\n",
            idx + 1,
            m.home_team.display_name(),
            m.away_team.display_name()
        ));
        result.push_str(&format!("   {} - {minute}'\n", m.competition.name));
        result.push_str(&format!("   Status: {}\n\n", m.status));
    }

    Outcome::Ok(result.trim_end().to_string())
}

/// Matches between two dates, grouped by calendar day in ascending order
///
/// Matches keep their source order inside a day.
pub fn format_matches_by_date(date_from: &str, date_to: &str, matches: &[Match]) -> Outcome {
    if matches.is_empty() {
        return Outcome::NotFound(format!(
            "No matches found between {date_from} and {date_to}"
        ));
    }

    let mut by_date: BTreeMap<&str, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        by_date.entry(m.date_key()).or_default().push(m);
    }

    let mut result = format!("Matches from {date_from} to {date_to}:\n\n");
    for (date, day) in by_date {
        result.push_str(&format!("📅 {}\n", long_date(date)));
        result.push_str(&format!("{}\n", "─".repeat(50)));

        for m in day {
            result.push_str(&format!(
                "{} | {} {} {}\n",
                kickoff_time(&m.utc_date),
                m.home_team.display_short_name(),
                score_or_dash(&m.score.full_time),
                m.away_team.display_short_name()
            ));
            result.push_str(&format!("     {} - {}\n\n", m.competition.name, m.status));
        }
    }

    Outcome::Ok(result.trim_end().to_string())
}

/// Recent results for a resolved team, in source order
///
/// Each line carries the outcome letter for `team_id`, or `-` when the match
/// cannot be classified.
pub fn format_team_results(team_name: &str, team_id: u64, matches: &[Match]) -> Outcome {
    if matches.is_empty() {
        return Outcome::NotFound(format!(
            "No recent results found for team '{team_name}'"
        ));
    }

    let mut result = format!("Recent results for {team_name}:\n\n");
    for (idx, m) in matches.iter().enumerate() {
        let letter = classify_match(m, team_id)
            .map(|outcome| outcome.letter())
            .unwrap_or('-');
        result.push_str(&format!(
            "{}. {} {} {} ({letter}) - {}\n",
            idx + 1,
            m.home_team.display_name(),
            score_or_dash(&m.score.full_time),
            m.away_team.display_name(),
            short_date(&m.utc_date)
        ));
    }

    Outcome::Ok(result.trim_end().to_string())
}
