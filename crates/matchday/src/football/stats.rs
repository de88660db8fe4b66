use super::{client_from_global, print_outcome, settle, FootballClient};
use crate::prelude::*;
use matchday_core::models::{CompetitionsResponse, ScorersResponse, StandingsResponse};
use matchday_core::report::{
    competition_not_found, format_competitions, format_standings, format_top_scorers,
};
use matchday_core::validate::{
    clamp_limit, validate_competition_code, DEFAULT_SCORERS_LIMIT, MAX_SCORERS_LIMIT,
};
use matchday_core::Outcome;

/// Competition commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// League table for a competition
    #[clap(name = "standings")]
    Standings(CompetitionOptions),

    /// Top scorers in a competition
    #[clap(name = "scorers")]
    Scorers(ScorersOptions),

    /// Competitions available to the API key
    #[clap(name = "competitions")]
    Competitions,
}

#[derive(Debug, clap::Args, Clone)]
pub struct CompetitionOptions {
    /// Competition code (e.g., PL, BL1, SA, FL1, PD, CL)
    pub code: String,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ScorersOptions {
    /// Competition code (e.g., PL, BL1, SA, FL1, PD, CL)
    pub code: String,

    /// Number of scorers (1-20)
    #[arg(short, long)]
    pub limit: Option<i64>,
}

fn competition_path(code: &str, resource: &str) -> String {
    format!("competitions/{}/{resource}", urlencoding::encode(code))
}

/// Like [`settle`], but an unknown competition reads as not found
fn settle_competition(result: Result<Outcome, GatewayError>, code: &str, subject: &str) -> Outcome {
    match result {
        Err(err) if err.status() == Some(404) => {
            log::error!("Competition '{code}' not found: {err}");
            competition_not_found(code)
        }
        result => settle(result, subject),
    }
}

/// League table for a competition code
pub async fn standings_data(client: &FootballClient, code: &str) -> Outcome {
    let result = client
        .get::<StandingsResponse>(&competition_path(code, "standings"), &[])
        .await
        .map(|response| format_standings(code, &response.standings));

    settle_competition(result, code, "standings")
}

/// Top scorers for a competition code
pub async fn top_scorers_data(client: &FootballClient, code: &str, limit: Option<i64>) -> Outcome {
    let limit = clamp_limit(limit, DEFAULT_SCORERS_LIMIT, MAX_SCORERS_LIMIT);
    let result = client
        .get::<ScorersResponse>(
            &competition_path(code, "scorers"),
            &[("limit", limit.to_string())],
        )
        .await
        .map(|response| format_top_scorers(code, &response.scorers));

    settle_competition(result, code, "top scorers")
}

/// Every competition the API exposes
pub async fn competitions_data(client: &FootballClient) -> Outcome {
    let result = client
        .get::<CompetitionsResponse>("competitions", &[])
        .await
        .map(|response| format_competitions(&response.competitions));

    settle(result, "competitions")
}

/// Run competition commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = client_from_global(&global)?;

    let outcome = match cmd {
        Commands::Standings(options) => match validate_competition_code(&options.code) {
            Ok(code) => standings_data(&client, &code).await,
            Err(outcome) => outcome,
        },
        Commands::Scorers(options) => match validate_competition_code(&options.code) {
            Ok(code) => top_scorers_data(&client, &code, options.limit).await,
            Err(outcome) => outcome,
        },
        Commands::Competitions => competitions_data(&client).await,
    };

    print_outcome(outcome, &global)
}
