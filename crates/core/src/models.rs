//! Domain models for football-data.org v4 responses
//!
//! Every record is strongly typed. Required scalars must be present or the
//! response fails to deserialize; collections default to empty so an absent
//! array reads as "no results" rather than a malformed payload.

use serde::Deserialize;

// ============================================================================
// Teams
// ============================================================================

/// Team record as returned by the `/teams` listing
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub founded: Option<u32>,
    #[serde(default, rename = "clubColors")]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Shown in place of a side that has not been decided yet
pub const UNDECIDED_TEAM: &str = "TBD";

/// Team subset embedded in matches and standings
///
/// Knockout fixtures list undecided sides with every field null.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "shortName")]
    pub short_name: Option<String>,
}

impl TeamRef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNDECIDED_TEAM)
    }

    /// Short name, falling back to the full name
    pub fn display_short_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(UNDECIDED_TEAM)
    }
}

/// Squad member from `/teams/{id}`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default, rename = "shirtNumber")]
    pub shirt_number: Option<u32>,
}

/// Full team record with squad, from `/teams/{id}`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TeamDetail {
    #[serde(flatten)]
    pub team: Team,
    #[serde(default)]
    pub squad: Vec<Player>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

// ============================================================================
// Matches
// ============================================================================

/// Goals for each side; `None` means the period has not been played
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreLine {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    #[serde(default, rename = "fullTime")]
    pub full_time: ScoreLine,
    #[serde(default, rename = "halfTime")]
    pub half_time: ScoreLine,
}

/// Competition subset embedded in a match
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CompetitionRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Live minute; the API sends either a number or a label such as "45+2"
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Minute {
    Number(u32),
    Label(String),
}

impl std::fmt::Display for Minute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Minute::Number(n) => write!(f, "{n}"),
            Minute::Label(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: u64,
    #[serde(rename = "utcDate")]
    pub utc_date: String,
    pub status: String,
    #[serde(default)]
    pub minute: Option<Minute>,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamRef,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamRef,
    #[serde(default)]
    pub score: Score,
    pub competition: CompetitionRef,
}

impl Match {
    /// Calendar date portion of `utcDate` (`YYYY-MM-DD`)
    pub fn date_key(&self) -> &str {
        self.utc_date
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.utc_date)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

// ============================================================================
// Competitions, standings, scorers
// ============================================================================

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Competition {
    pub id: u64,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub competition_type: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompetitionsResponse {
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

/// One row of a league table
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Standing {
    pub position: u32,
    pub team: TeamRef,
    #[serde(rename = "playedGames")]
    pub played_games: u32,
    #[serde(default)]
    pub form: Option<String>,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    #[serde(rename = "goalsFor")]
    pub goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
}

/// A table within a standings response (TOTAL, HOME, AWAY, or a group)
#[derive(Debug, Deserialize, Clone)]
pub struct StandingTable {
    #[serde(default, rename = "type")]
    pub table_type: Option<String>,
    #[serde(default)]
    pub table: Vec<Standing>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingTable>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlayerRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScorerTeam {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scorer {
    pub player: PlayerRef,
    pub team: ScorerTeam,
    pub goals: u32,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScorersResponse {
    #[serde(default)]
    pub scorers: Vec<Scorer>,
}
