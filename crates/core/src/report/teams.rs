//! Team reports: form, squad and club information

use super::short_date;
use crate::models::{Match, Player, Team};
use crate::outcome::Outcome;
use crate::results::{classify_match, summarize_form, MatchOutcome};

/// Positions listed first in a squad report, in this order
const POSITION_ORDER: [&str; 4] = ["Goalkeeper", "Defence", "Midfield", "Offence"];

pub fn team_not_found(team_name: &str) -> Outcome {
    Outcome::NotFound(format!("Team '{team_name}' not found"))
}

/// Form over the most recent finished matches
///
/// `matches` arrive newest first. They are reported oldest first, and matches
/// that cannot be classified for `team_id` are left out of every count.
pub fn format_team_form(team_name: &str, team_id: u64, matches: &[Match]) -> Outcome {
    let classified: Vec<(&Match, MatchOutcome)> = matches
        .iter()
        .rev()
        .filter_map(|m| classify_match(m, team_id).ok().map(|outcome| (m, outcome)))
        .collect();

    if classified.is_empty() {
        return Outcome::NotFound(format!(
            "No recent matches found for team '{team_name}'"
        ));
    }

    let outcomes: Vec<MatchOutcome> = classified.iter().map(|(_, outcome)| *outcome).collect();
    let summary = summarize_form(&outcomes);

    let mut result = format!(
        "Team Form for {team_name} (Last {} matches):\n\n",
        summary.played
    );
    result.push_str(&format!("Form: {}\n", summary.form));
    result.push_str(&format!(
        "Wins: {} | Draws: {} | Losses: {}\n",
        summary.wins, summary.draws, summary.losses
    ));
    result.push_str(&format!(
        "Points: {}/{}\n",
        summary.points,
        summary.max_points()
    ));
    result.push_str(&format!("Win Rate: {}%\n\n", summary.win_rate()));

    result.push_str("Recent Results:\n");
    for (idx, (m, outcome)) in classified.iter().enumerate() {
        // Classified matches always carry both scores.
        let home = m.score.full_time.home.unwrap_or_default();
        let away = m.score.full_time.away.unwrap_or_default();
        result.push_str(&format!(
            "{}. {} {home}-{away} {} ({outcome}) - {}\n",
            idx + 1,
            m.home_team.display_short_name(),
            m.away_team.display_short_name(),
            short_date(&m.utc_date)
        ));
    }

    Outcome::Ok(result.trim_end().to_string())
}

/// Age as a calendar-year difference, `None` when the birth date is unusable
fn age_in_years(date_of_birth: Option<&str>, current_year: i32) -> Option<i32> {
    let year: i32 = date_of_birth?.get(..4)?.parse().ok()?;
    Some(current_year - year)
}

fn player_line(player: &Player, current_year: i32) -> String {
    let shirt = player
        .shirt_number
        .map(|n| format!(" #{n}"))
        .unwrap_or_default();
    let nationality = player.nationality.as_deref().unwrap_or("Unknown");
    let age = match age_in_years(player.date_of_birth.as_deref(), current_year) {
        Some(age) => format!("{age} years old"),
        None => "unknown age".to_string(),
    };
    format!("  • {}{shirt} ({nationality}, {age})\n", player.name)
}

/// Squad grouped by position
///
/// Standard positions come first in a fixed order; anything else follows in
/// the order it was first seen.
pub fn format_team_squad(team_name: &str, squad: &[Player], current_year: i32) -> Outcome {
    if squad.is_empty() {
        return Outcome::NotFound(format!(
            "No squad information available for team '{team_name}'"
        ));
    }

    let mut groups: Vec<(&str, Vec<&Player>)> = Vec::new();
    for player in squad {
        let position = player.position.as_deref().unwrap_or("Unknown");
        match groups.iter_mut().find(|(name, _)| *name == position) {
            Some((_, players)) => players.push(player),
            None => groups.push((position, vec![player])),
        }
    }

    let rank = |position: &str| {
        POSITION_ORDER
            .iter()
            .position(|p| *p == position)
            .unwrap_or(POSITION_ORDER.len())
    };
    // Stable sort keeps encounter order among the non-standard positions.
    groups.sort_by_key(|(position, _)| rank(position));

    let mut result = format!("Squad for {team_name}:\n\n");
    for (position, players) in groups {
        result.push_str(&format!("{position}s:\n"));
        for player in players {
            result.push_str(&player_line(player, current_year));
        }
        result.push('\n');
    }

    Outcome::Ok(result.trim_end().to_string())
}

/// Club information from a roster entry
pub fn format_team_info(team_name: &str, team: &Team) -> Outcome {
    let founded = team
        .founded
        .map_or_else(|| "Unknown".to_string(), |year| year.to_string());

    Outcome::Ok(format!(
        "Team Information for {team_name}:\n\
         - Full Name: {}\n\
         - Short Name: {}\n\
         - Founded: {founded}\n\
         - Colors: {}\n\
         - Venue: {}\n\
         - Website: {}",
        team.name,
        team.short_name,
        team.club_colors.as_deref().unwrap_or("Unknown"),
        team.venue.as_deref().unwrap_or("Unknown"),
        team.website.as_deref().unwrap_or("Not available"),
    ))
}
