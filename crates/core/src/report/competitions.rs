//! Competition reports: league tables, top scorers and the competition list

use super::signed;
use crate::models::{Competition, Scorer, StandingTable};
use crate::outcome::Outcome;

pub fn competition_not_found(code: &str) -> Outcome {
    Outcome::NotFound(format!(
        "Competition '{code}' not found. Try: PL, BL1, SA, FL1, CL, EL"
    ))
}

/// League table from the first table in a standings response
pub fn format_standings(code: &str, tables: &[StandingTable]) -> Outcome {
    let Some(main) = tables.first() else {
        return Outcome::NotFound(format!("No standings found for competition '{code}'"));
    };
    if main.table.is_empty() {
        return Outcome::NotFound(format!("No table data found for competition '{code}'"));
    }

    let mut result = format!("League Table for {}:\n\n", code.to_uppercase());
    result.push_str(&format!(
        "{:>3} | {:<24} | {:>2} | {:>2} | {:>2} | {:>2} | {:>3} | {:>3} | {:>4} | {:>3} | {}\n",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form"
    ));
    result.push_str(&format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}\n",
        "-".repeat(4),
        "-".repeat(26),
        "-".repeat(4),
        "-".repeat(4),
        "-".repeat(4),
        "-".repeat(4),
        "-".repeat(5),
        "-".repeat(5),
        "-".repeat(6),
        "-".repeat(5),
        "-".repeat(6),
    ));

    for row in &main.table {
        result.push_str(&format!(
            "{:>3} | {:<24} | {:>2} | {:>2} | {:>2} | {:>2} | {:>3} | {:>3} | {:>4} | {:>3} | {:>5}\n",
            row.position,
            row.team.display_short_name(),
            row.played_games,
            row.won,
            row.draw,
            row.lost,
            row.goals_for,
            row.goals_against,
            signed(row.goal_difference),
            row.points,
            row.form.as_deref().unwrap_or_default(),
        ));
    }

    Outcome::Ok(result)
}

/// Top scorers table, ranked by source order
pub fn format_top_scorers(code: &str, scorers: &[Scorer]) -> Outcome {
    if scorers.is_empty() {
        return Outcome::NotFound(format!(
            "No scorer data found for competition '{code}'"
        ));
    }

    let mut result = format!("Top Scorers in {}:\n\n", code.to_uppercase());
    result.push_str(&format!(
        "{:>3} | {:<26} | {:<23} | {:>5}\n",
        "Pos", "Player", "Team", "Goals"
    ));
    result.push_str(&format!(
        "{}|{}|{}|{}\n",
        "-".repeat(4),
        "-".repeat(28),
        "-".repeat(25),
        "-".repeat(6)
    ));

    for (idx, scorer) in scorers.iter().enumerate() {
        result.push_str(&format!(
            "{:>3} | {:<26} | {:<23} | {:>5}\n",
            idx + 1,
            scorer.player.name,
            scorer.team.name,
            scorer.goals
        ));
    }

    Outcome::Ok(result)
}

pub fn format_competitions(competitions: &[Competition]) -> Outcome {
    if competitions.is_empty() {
        return Outcome::NotFound("No competitions found".to_string());
    }

    let mut result = String::from("Available Competitions:\n\n");
    for (idx, comp) in competitions.iter().enumerate() {
        result.push_str(&format!("{}. {} ({})\n", idx + 1, comp.name, comp.code));
        result.push_str(&format!("   Type: {}\n", comp.competition_type));
        result.push_str(&format!("   ID: {}\n\n", comp.id));
    }

    Outcome::Ok(result.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerRef, ScorerTeam, Standing, TeamRef};

    fn standing(position: u32, short: &str, goal_difference: i32, form: Option<&str>) -> Standing {
        Standing {
            position,
            team: TeamRef {
                id: Some(u64::from(position)),
                name: Some(format!("{short} FC")),
                short_name: Some(short.to_string()),
            },
            played_games: 21,
            form: form.map(str::to_string),
            won: 15,
            draw: 3,
            lost: 3,
            points: 48,
            goals_for: 50,
            goals_against: 45,
            goal_difference,
        }
    }

    fn table(rows: Vec<Standing>) -> Vec<StandingTable> {
        vec![StandingTable {
            table_type: Some("TOTAL".to_string()),
            table: rows,
        }]
    }

    fn data_lines(text: &str) -> Vec<&str> {
        text.lines().skip(4).collect()
    }

    // ============================================================================
    // format_standings tests
    // ============================================================================

    #[test]
    fn test_format_standings_goal_difference_sign() {
        let rows = table(vec![
            standing(1, "Liverpool", 5, Some("W,W,D")),
            standing(2, "Arsenal", 0, None),
            standing(3, "Everton", -3, None),
        ]);

        let text = format_standings("pl", &rows).into_text();
        let lines = data_lines(&text);
        assert!(lines[0].contains("|   +5 |"));
        assert!(lines[1].contains("|   +0 |"));
        assert!(lines[2].contains("|   -3 |"));
    }

    #[test]
    fn test_format_standings_layout() {
        let text = format_standings("pl", &table(vec![standing(1, "Liverpool", 5, Some("WWDLW"))])).into_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "League Table for PL:");
        assert_eq!(
            lines[2],
            "Pos | Team                     |  P |  W |  D |  L |  GF |  GA |   GD | Pts | Form"
        );
        assert_eq!(
            lines[4],
            "  1 | Liverpool                | 21 | 15 |  3 |  3 |  50 |  45 |   +5 |  48 | WWDLW"
        );
        // Separator lines up with every column boundary of the header.
        let header_bars: Vec<usize> = lines[2].match_indices('|').map(|(i, _)| i).collect();
        let rule_bars: Vec<usize> = lines[3].match_indices('|').map(|(i, _)| i).collect();
        assert_eq!(header_bars, rule_bars);
    }

    #[test]
    fn test_format_standings_preserves_source_order() {
        let rows = table(vec![standing(2, "Arsenal", 1, None), standing(1, "Liverpool", 2, None)]);
        let text = format_standings("PL", &rows).into_text();
        let lines = data_lines(&text);
        assert!(lines[0].contains("Arsenal"));
        assert!(lines[1].contains("Liverpool"));
    }

    #[test]
    fn test_format_standings_empty() {
        assert_eq!(
            format_standings("PL", &[]).to_string(),
            "No standings found for competition 'PL'"
        );
        assert_eq!(
            format_standings("PL", &table(vec![])).to_string(),
            "No table data found for competition 'PL'"
        );
    }

    // ============================================================================
    // format_top_scorers tests
    // ============================================================================

    #[test]
    fn test_format_top_scorers() {
        let scorers = vec![Scorer {
            player: PlayerRef {
                id: 1,
                name: "Erling Haaland".to_string(),
            },
            team: ScorerTeam {
                id: 65,
                name: "Manchester City FC".to_string(),
            },
            goals: 27,
            assists: Some(5),
            penalties: Some(7),
        }];

        let text = format_top_scorers("pl", &scorers).into_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Top Scorers in PL:");
        assert_eq!(
            lines[2],
            "Pos | Player                     | Team                    | Goals"
        );
        assert_eq!(
            lines[4],
            "  1 | Erling Haaland             | Manchester City FC      |    27"
        );
        let header_bars: Vec<usize> = lines[2].match_indices('|').map(|(i, _)| i).collect();
        let rule_bars: Vec<usize> = lines[3].match_indices('|').map(|(i, _)| i).collect();
        assert_eq!(header_bars, rule_bars);
    }

    #[test]
    fn test_format_top_scorers_empty() {
        assert_eq!(
            format_top_scorers("XX", &[]).to_string(),
            "No scorer data found for competition 'XX'"
        );
    }

    #[test]
    fn test_competition_not_found() {
        assert_eq!(
            competition_not_found("ZZ").to_string(),
            "Competition 'ZZ' not found. Try: PL, BL1, SA, FL1, CL, EL"
        );
    }

    // ============================================================================
    // format_competitions tests
    // ============================================================================

    #[test]
    fn test_format_competitions() {
        let comps = vec![
            Competition {
                id: 2021,
                name: "Premier League".to_string(),
                code: "PL".to_string(),
                competition_type: "LEAGUE".to_string(),
            },
            Competition {
                id: 2001,
                name: "UEFA Champions League".to_string(),
                code: "CL".to_string(),
                competition_type: "CUP".to_string(),
            },
        ];

        assert_eq!(
            format_competitions(&comps).into_text(),
            "Available Competitions:\n\n\
             1. Premier League (PL)\n   Type: LEAGUE\n   ID: 2021\n\n\
             2. UEFA Champions League (CL)\n   Type: CUP\n   ID: 2001"
        );
    }

    #[test]
    fn test_format_competitions_empty() {
        assert_eq!(format_competitions(&[]).to_string(), "No competitions found");
    }
}
