//! Football tool handlers
//!
//! Arguments arrive camelCase. Names and codes are validated here, before the
//! orchestrator runs, and the resulting outcome becomes a text result whose
//! `isError` flag follows [`Outcome::is_error`].

use crate::football::{matches, stats, teams};
use crate::mcp::Context;
use crate::prelude::eprintln;
use matchday_core::validate::{validate_competition_code, validate_team_name};
use matchday_core::Outcome;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{CallToolResult, Content, JsonRpcError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamArgs {
    team_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamLimitArgs {
    team_name: String,
    limit: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DateRangeArgs {
    date_from: String,
    date_to: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompetitionArgs {
    competition_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompetitionLimitArgs {
    competition_code: String,
    limit: Option<f64>,
}

fn parse_args<T: DeserializeOwned>(arguments: Option<serde_json::Value>) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null)).map_err(|e| JsonRpcError {
        code: -32602,
        message: format!("Invalid arguments: {e}"),
        data: None,
    })
}

/// Limits arrive as JSON numbers; fractions are truncated before clamping
fn limit_arg(limit: Option<f64>) -> Option<i64> {
    limit.filter(|l| l.is_finite()).map(|l| l.trunc() as i64)
}

/// Wrap an outcome in the MCP result format
fn tool_result(outcome: Outcome) -> Result<serde_json::Value, JsonRpcError> {
    let is_error = outcome.is_error().then_some(true);
    let result = CallToolResult {
        content: vec![Content::Text {
            text: outcome.into_text(),
        }],
        is_error,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_next_match(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TeamArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!("Calling get_team_next_match: teamName={}", args.team_name);
    }

    let outcome = match validate_team_name(&args.team_name) {
        Ok(team) => matches::next_match_data(&ctx.client, &team).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_live_matches(ctx: &Context) -> Result<serde_json::Value, JsonRpcError> {
    if ctx.global.verbose {
        eprintln!("Calling get_live_matches");
    }

    tool_result(matches::live_matches_data(&ctx.client).await)
}

pub async fn handle_matches_by_date(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: DateRangeArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!(
            "Calling get_matches_by_date: dateFrom={}, dateTo={}",
            args.date_from, args.date_to
        );
    }

    tool_result(matches::matches_by_date_data(&ctx.client, &args.date_from, &args.date_to).await)
}

pub async fn handle_team_results(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TeamLimitArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!(
            "Calling get_team_results: teamName={}, limit={:?}",
            args.team_name, args.limit
        );
    }

    let outcome = match validate_team_name(&args.team_name) {
        Ok(team) => teams::team_results_data(&ctx.client, &team, limit_arg(args.limit)).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_team_form(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TeamLimitArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!(
            "Calling get_team_form: teamName={}, limit={:?}",
            args.team_name, args.limit
        );
    }

    let outcome = match validate_team_name(&args.team_name) {
        Ok(team) => teams::team_form_data(&ctx.client, &team, limit_arg(args.limit)).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_team_squad(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TeamArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!("Calling get_team_squad: teamName={}", args.team_name);
    }

    let outcome = match validate_team_name(&args.team_name) {
        Ok(team) => teams::team_squad_data(&ctx.client, &team).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_team_info(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TeamArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!("Calling get_team_info: teamName={}", args.team_name);
    }

    let outcome = match validate_team_name(&args.team_name) {
        Ok(team) => teams::team_info_data(&ctx.client, &team).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_standings(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: CompetitionArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!("Calling get_standings: competitionCode={}", args.competition_code);
    }

    let outcome = match validate_competition_code(&args.competition_code) {
        Ok(code) => stats::standings_data(&ctx.client, &code).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_top_scorers(
    arguments: Option<serde_json::Value>,
    ctx: &Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: CompetitionLimitArgs = parse_args(arguments)?;

    if ctx.global.verbose {
        eprintln!(
            "Calling get_top_scorers: competitionCode={}, limit={:?}",
            args.competition_code, args.limit
        );
    }

    let outcome = match validate_competition_code(&args.competition_code) {
        Ok(code) => stats::top_scorers_data(&ctx.client, &code, limit_arg(args.limit)).await,
        Err(outcome) => outcome,
    };

    tool_result(outcome)
}

pub async fn handle_competitions(ctx: &Context) -> Result<serde_json::Value, JsonRpcError> {
    if ctx.global.verbose {
        eprintln!("Calling get_competitions");
    }

    tool_result(stats::competitions_data(&ctx.client).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limit_arg_truncates() {
        assert_eq!(limit_arg(Some(3.9)), Some(3));
        assert_eq!(limit_arg(Some(-2.0)), Some(-2));
        assert_eq!(limit_arg(Some(f64::NAN)), None);
        assert_eq!(limit_arg(None), None);
    }

    #[test]
    fn test_tool_result_flags_errors_only() {
        let ok = tool_result(Outcome::Ok("fine".to_string())).unwrap();
        assert_eq!(ok, json!({"content": [{"type": "text", "text": "fine"}]}));

        let missing = tool_result(Outcome::NotFound("Team 'zz' not found".to_string())).unwrap();
        assert!(missing.get("isError").is_none());

        let limited = tool_result(Outcome::RateLimited).unwrap();
        assert_eq!(limited["isError"], json!(true));
        assert_eq!(
            limited["content"][0]["text"],
            json!("Rate limit exceeded: Please try again later")
        );
    }

    #[test]
    fn test_parse_args_reports_invalid_params() {
        let err = parse_args::<TeamArgs>(Some(json!({"team": "Arsenal"}))).unwrap_err();
        assert_eq!(err.code, -32602);

        let args: CompetitionLimitArgs =
            parse_args(Some(json!({"competitionCode": "PL", "limit": 3}))).unwrap();
        assert_eq!(args.competition_code, "PL");
        assert_eq!(args.limit, Some(3.0));
    }
}
