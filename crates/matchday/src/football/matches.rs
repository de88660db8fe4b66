use super::{client_from_global, print_outcome, settle, FootballClient};
use crate::prelude::{eprintln, *};
use matchday_core::models::MatchesResponse;
use matchday_core::report::{
    format_live_matches, format_matches_by_date, format_next_match, team_not_found,
};
use matchday_core::validate::{validate_date_range, validate_team_name, MAX_DATE_MATCHES};
use matchday_core::Outcome;

/// Match commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Next scheduled match for a team
    #[clap(name = "next")]
    Next(NextOptions),

    /// Matches currently being played
    #[clap(name = "live")]
    Live,

    /// Matches between two dates (YYYY-MM-DD)
    #[clap(name = "range")]
    Range(RangeOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct NextOptions {
    /// Team name, or part of it (e.g., "arsenal")
    pub team: String,
}

#[derive(Debug, clap::Args, Clone)]
pub struct RangeOptions {
    /// First day, inclusive
    pub date_from: String,

    /// Last day, inclusive
    pub date_to: String,
}

/// Next scheduled match for a team
pub async fn next_match_data(client: &FootballClient, team_name: &str) -> Outcome {
    settle(fetch_next_match(client, team_name).await, "match data")
}

async fn fetch_next_match(client: &FootballClient, team_name: &str) -> Result<Outcome, GatewayError> {
    let Some(team) = client.resolve_team(team_name).await? else {
        return Ok(team_not_found(team_name));
    };

    let response: MatchesResponse = client
        .get(
            &format!("teams/{}/matches", team.id),
            &[("status", "SCHEDULED".to_string()), ("limit", "1".to_string())],
        )
        .await?;

    Ok(format_next_match(team_name, response.matches.first()))
}

/// Matches with status LIVE
pub async fn live_matches_data(client: &FootballClient) -> Outcome {
    let result = client
        .get::<MatchesResponse>("matches", &[("status", "LIVE".to_string())])
        .await
        .map(|response| format_live_matches(&response.matches));

    settle(result, "live matches")
}

/// Matches between two dates, grouped by day
///
/// Malformed or reversed dates are rejected before any request is made.
pub async fn matches_by_date_data(client: &FootballClient, date_from: &str, date_to: &str) -> Outcome {
    if let Err(outcome) = validate_date_range(date_from, date_to) {
        return outcome;
    }

    let result = client
        .get::<MatchesResponse>(
            "matches",
            &[
                ("dateFrom", date_from.to_string()),
                ("dateTo", date_to.to_string()),
                ("limit", MAX_DATE_MATCHES.to_string()),
            ],
        )
        .await
        .map(|response| format_matches_by_date(date_from, date_to, &response.matches));

    settle(result, "matches")
}

/// Run match commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = client_from_global(&global)?;

    let outcome = match cmd {
        Commands::Next(options) => match validate_team_name(&options.team) {
            Ok(team) => next_match_data(&client, &team).await,
            Err(outcome) => outcome,
        },
        Commands::Live => live_matches_data(&client).await,
        Commands::Range(options) => {
            if global.verbose {
                eprintln!(
                    "Fetching matches from {} to {}...",
                    options.date_from, options.date_to
                );
            }
            matches_by_date_data(&client, &options.date_from, &options.date_to).await
        }
    };

    print_outcome(outcome, &global)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_next_match_data() {
        let server = MockServer::start().await;
        mount_roster(&server).await;
        Mock::given(method("GET"))
            .and(path("/teams/57/matches"))
            .and(query_param("status", "SCHEDULED"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matches": [match_json(1, "2024-01-20T15:00:00Z", "SCHEDULED", (57, "Arsenal"), (61, "Chelsea"), (None, None))]
            })))
            .mount(&server)
            .await;

        let outcome = next_match_data(&client_for(&server), "Arsenal").await;
        assert_eq!(
            outcome,
            Outcome::Ok("Next match for Arsenal: Arsenal FC vs Chelsea FC on 1/20/2024".to_string())
        );
    }

    #[tokio::test]
    async fn test_next_match_data_team_not_found_skips_second_call() {
        let server = MockServer::start().await;
        mount_roster(&server).await;
        Mock::given(method("GET"))
            .and(path("/teams/57/matches"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = next_match_data(&client_for(&server), "zz").await;
        assert_eq!(outcome.to_string(), "Team 'zz' not found");
    }

    #[tokio::test]
    async fn test_next_match_data_none_scheduled() {
        let server = MockServer::start().await;
        mount_roster(&server).await;
        Mock::given(method("GET"))
            .and(path("/teams/57/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matches": []})))
            .mount(&server)
            .await;

        let outcome = next_match_data(&client_for(&server), "Arsenal").await;
        assert_eq!(
            outcome.to_string(),
            "No upcoming matches found for team 'Arsenal'"
        );
    }

    #[tokio::test]
    async fn test_next_match_data_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let outcome = next_match_data(&client_for(&server), "Arsenal").await;
        assert_eq!(outcome, Outcome::AuthError);
    }

    #[tokio::test]
    async fn test_live_matches_data_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .and(query_param("status", "LIVE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matches": []})))
            .mount(&server)
            .await;

        let outcome = live_matches_data(&client_for(&server)).await;
        assert_eq!(outcome.to_string(), "No live matches currently playing");
    }

    #[tokio::test]
    async fn test_live_matches_data_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let outcome = live_matches_data(&client_for(&server)).await;
        assert_eq!(outcome, Outcome::UpstreamError);
    }

    #[tokio::test]
    async fn test_matches_by_date_rejects_bad_format_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = matches_by_date_data(&client_for(&server), "2024/01/15", "2024-01-20").await;
        assert_eq!(
            outcome.to_string(),
            "Error: Dates must be in YYYY-MM-DD format (e.g., 2024-01-15)"
        );
        assert!(outcome.is_error());
    }

    #[tokio::test]
    async fn test_matches_by_date_rejects_reversed_range_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = matches_by_date_data(&client_for(&server), "2024-01-20", "2024-01-15").await;
        assert_eq!(outcome.to_string(), "Error: dateFrom must not be after dateTo");
        assert!(outcome.is_error());
    }

    #[tokio::test]
    async fn test_matches_by_date_data_keeps_undecided_fixtures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matches": [
                    match_json(1, "2024-03-12T17:45:00Z", "FINISHED", (57, "Arsenal"), (61, "Chelsea"), (Some(2), Some(1))),
                    {
                        "id": 2,
                        "utcDate": "2024-03-12T20:00:00Z",
                        "status": "TIMED",
                        "homeTeam": {"id": null, "name": null, "shortName": null, "tla": null, "crest": null},
                        "awayTeam": {"id": null, "name": null, "shortName": null, "tla": null, "crest": null},
                        "score": {"fullTime": {"home": null, "away": null}, "halfTime": {"home": null, "away": null}},
                        "competition": {"id": 2001, "name": "UEFA Champions League", "code": "CL", "type": "CUP", "emblem": ""}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let outcome = matches_by_date_data(&client_for(&server), "2024-03-12", "2024-03-12").await;
        assert!(matches!(outcome, Outcome::Ok(_)));
        let text = outcome.into_text();
        assert!(text.contains("05:45 PM | Arsenal 2-1 Chelsea"));
        assert!(text.contains("08:00 PM | TBD --- TBD"));
        assert!(text.contains("     UEFA Champions League - TIMED"));
    }

    #[tokio::test]
    async fn test_matches_by_date_data_groups_days() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .and(query_param("dateFrom", "2024-01-15"))
            .and(query_param("dateTo", "2024-01-20"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matches": [
                    match_json(2, "2024-01-20T15:00:00Z", "FINISHED", (57, "Arsenal"), (61, "Chelsea"), (Some(2), Some(1))),
                    match_json(1, "2024-01-15T20:00:00Z", "FINISHED", (62, "Everton"), (65, "Man City"), (Some(0), Some(0)))
                ]
            })))
            .mount(&server)
            .await;

        let text = matches_by_date_data(&client_for(&server), "2024-01-15", "2024-01-20")
            .await
            .into_text();
        let monday = text.find("Monday, January 15, 2024").unwrap();
        let saturday = text.find("Saturday, January 20, 2024").unwrap();
        assert!(monday < saturday);
        assert!(text.contains("08:00 PM | Everton 0-0 Man City"));
    }
}
