//! Match outcome classification and form aggregation
//!
//! The side a team played on is decided by its numeric id, never by matching
//! names, so a query like "united" cannot be mistaken for the opponent.

use crate::models::Match;

pub const FINISHED: &str = "FINISHED";

/// Win, draw or loss from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn letter(self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Draw => 'D',
            MatchOutcome::Loss => 'L',
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Match {0} is not finished (status {1})")]
    NotFinished(u64, String),

    #[error("Match {0} has no full-time score")]
    MissingScore(u64),

    #[error("Team {team_id} did not play in match {match_id}")]
    TeamNotInMatch { match_id: u64, team_id: u64 },
}

/// Classify a finished match for the team with id `team_id`
pub fn classify_match(m: &Match, team_id: u64) -> Result<MatchOutcome, ClassifyError> {
    if m.status != FINISHED {
        return Err(ClassifyError::NotFinished(m.id, m.status.clone()));
    }

    let (Some(home), Some(away)) = (m.score.full_time.home, m.score.full_time.away) else {
        return Err(ClassifyError::MissingScore(m.id));
    };

    let (ours, theirs) = if m.home_team.id == Some(team_id) {
        (home, away)
    } else if m.away_team.id == Some(team_id) {
        (away, home)
    } else {
        return Err(ClassifyError::TeamNotInMatch {
            match_id: m.id,
            team_id,
        });
    };

    Ok(match ours.cmp(&theirs) {
        std::cmp::Ordering::Greater => MatchOutcome::Win,
        std::cmp::Ordering::Less => MatchOutcome::Loss,
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    })
}

/// Aggregated form over a run of finished matches
#[derive(Debug, Clone, PartialEq)]
pub struct FormSummary {
    /// Outcome letters, oldest first
    pub form: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    /// Number of matches that were classified
    pub played: u32,
}

impl FormSummary {
    /// Percentage of wins, formatted with one decimal place
    pub fn win_rate(&self) -> String {
        if self.played == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", f64::from(self.wins) / f64::from(self.played) * 100.0)
    }

    pub fn max_points(&self) -> u32 {
        self.played * 3
    }
}

/// Fold outcomes, given in chronological order, into a form summary
pub fn summarize_form(outcomes: &[MatchOutcome]) -> FormSummary {
    let mut summary = FormSummary {
        form: String::with_capacity(outcomes.len()),
        wins: 0,
        draws: 0,
        losses: 0,
        points: 0,
        played: 0,
    };

    for outcome in outcomes {
        match outcome {
            MatchOutcome::Win => summary.wins += 1,
            MatchOutcome::Draw => summary.draws += 1,
            MatchOutcome::Loss => summary.losses += 1,
        }
        summary.form.push(outcome.letter());
        summary.played += 1;
    }

    summary.points = summary.wins * 3 + summary.draws;
    summary
}
