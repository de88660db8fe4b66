use super::{client_from_global, print_outcome, settle, FootballClient};
use crate::prelude::{eprintln, *};
use chrono::Datelike;
use matchday_core::models::{MatchesResponse, TeamDetail};
use matchday_core::report::{
    format_team_form, format_team_info, format_team_results, format_team_squad, team_not_found,
};
use matchday_core::validate::{
    clamp_limit, validate_team_name, DEFAULT_FORM_MATCHES, DEFAULT_RESULTS_LIMIT,
    MAX_FORM_MATCHES, MAX_RESULTS_LIMIT,
};
use matchday_core::Outcome;

/// Team commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Recent finished matches for a team
    #[clap(name = "results")]
    Results(LimitOptions),

    /// Win/draw/loss form over recent matches
    #[clap(name = "form")]
    Form(LimitOptions),

    /// Squad grouped by position
    #[clap(name = "squad")]
    Squad(TeamOptions),

    /// Club information (founded, colors, venue)
    #[clap(name = "info")]
    Info(TeamOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct TeamOptions {
    /// Team name, or part of it (e.g., "arsenal")
    pub team: String,
}

#[derive(Debug, clap::Args, Clone)]
pub struct LimitOptions {
    /// Team name, or part of it (e.g., "arsenal")
    pub team: String,

    /// Number of matches (results: 1-20, form: 1-10)
    #[arg(short, long)]
    pub limit: Option<i64>,
}

/// Fetch the most recent finished matches of a resolved team
async fn finished_matches(
    client: &FootballClient,
    team_id: u64,
    limit: u32,
) -> Result<MatchesResponse, GatewayError> {
    client
        .get(
            &format!("teams/{team_id}/matches"),
            &[("status", "FINISHED".to_string()), ("limit", limit.to_string())],
        )
        .await
}

/// Recent results for a team, each annotated W/D/L
pub async fn team_results_data(client: &FootballClient, team_name: &str, limit: Option<i64>) -> Outcome {
    let limit = clamp_limit(limit, DEFAULT_RESULTS_LIMIT, MAX_RESULTS_LIMIT);
    settle(
        fetch_team_results(client, team_name, limit).await,
        "match results",
    )
}

async fn fetch_team_results(
    client: &FootballClient,
    team_name: &str,
    limit: u32,
) -> Result<Outcome, GatewayError> {
    let Some(team) = client.resolve_team(team_name).await? else {
        return Ok(team_not_found(team_name));
    };

    let response = finished_matches(client, team.id, limit).await?;
    Ok(format_team_results(team_name, team.id, &response.matches))
}

/// Form summary over a team's most recent finished matches
pub async fn team_form_data(client: &FootballClient, team_name: &str, limit: Option<i64>) -> Outcome {
    let limit = clamp_limit(limit, DEFAULT_FORM_MATCHES, MAX_FORM_MATCHES);
    settle(fetch_team_form(client, team_name, limit).await, "team form")
}

async fn fetch_team_form(
    client: &FootballClient,
    team_name: &str,
    limit: u32,
) -> Result<Outcome, GatewayError> {
    let Some(team) = client.resolve_team(team_name).await? else {
        return Ok(team_not_found(team_name));
    };

    let response = finished_matches(client, team.id, limit).await?;
    Ok(format_team_form(team_name, team.id, &response.matches))
}

/// Squad for a team, grouped by position
pub async fn team_squad_data(client: &FootballClient, team_name: &str) -> Outcome {
    settle(fetch_team_squad(client, team_name).await, "team squad")
}

async fn fetch_team_squad(client: &FootballClient, team_name: &str) -> Result<Outcome, GatewayError> {
    let Some(team) = client.resolve_team(team_name).await? else {
        return Ok(team_not_found(team_name));
    };

    let detail: TeamDetail = client.get(&format!("teams/{}", team.id), &[]).await?;
    let current_year = chrono::Utc::now().year();
    Ok(format_team_squad(team_name, &detail.squad, current_year))
}

/// Club information from the roster entry
pub async fn team_info_data(client: &FootballClient, team_name: &str) -> Outcome {
    let result = client.resolve_team(team_name).await.map(|team| match team {
        Some(team) => format_team_info(team_name, &team),
        None => team_not_found(team_name),
    });

    settle(result, "team information")
}

/// Run team commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = client_from_global(&global)?;

    let outcome = match cmd {
        Commands::Results(options) => match validate_team_name(&options.team) {
            Ok(team) => team_results_data(&client, &team, options.limit).await,
            Err(outcome) => outcome,
        },
        Commands::Form(options) => match validate_team_name(&options.team) {
            Ok(team) => team_form_data(&client, &team, options.limit).await,
            Err(outcome) => outcome,
        },
        Commands::Squad(options) => match validate_team_name(&options.team) {
            Ok(team) => {
                if global.verbose {
                    eprintln!("Fetching squad for {team}...");
                }
                team_squad_data(&client, &team).await
            }
            Err(outcome) => outcome,
        },
        Commands::Info(options) => match validate_team_name(&options.team) {
            Ok(team) => team_info_data(&client, &team).await,
            Err(outcome) => outcome,
        },
    };

    print_outcome(outcome, &global)
}
