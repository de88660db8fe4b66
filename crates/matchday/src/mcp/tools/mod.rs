//! MCP tool catalogue: `initialize`, `tools/list` and `tools/call` dispatch

mod football;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "MatchDay MCP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

fn team_name_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "minLength": 2,
        "description": "Team name or part of it, case-insensitive (e.g., 'Arsenal', 'real madrid')"
    })
}

fn competition_code_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "minLength": 2,
        "description": "Competition code: PL, BL1, SA, FL1, PD, DED, CL, EL"
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "get_team_next_match".to_string(),
            description: "Get the next scheduled match for a football team. The team is matched by case-insensitive partial name against the football-data.org team list.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "teamName": team_name_schema()
                },
                "required": ["teamName"]
            }),
        },
        Tool {
            name: "get_live_matches".to_string(),
            description: "List football matches currently being played, with score, competition and minute.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_matches_by_date".to_string(),
            description: "List football matches between two dates, grouped by day, with kick-off time, score and status.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "dateFrom": {
                        "type": "string",
                        "description": "First day, inclusive, in YYYY-MM-DD format (e.g., '2024-01-15')"
                    },
                    "dateTo": {
                        "type": "string",
                        "description": "Last day, inclusive, in YYYY-MM-DD format (e.g., '2024-01-20')"
                    }
                },
                "required": ["dateFrom", "dateTo"]
            }),
        },
        Tool {
            name: "get_team_results".to_string(),
            description: "Get recent match results for a football team, each marked W, D or L (shows last 5 matches by default).".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "teamName": team_name_schema(),
                    "limit": {
                        "type": "number",
                        "description": "Number of matches to return (default: 5, max: 20)"
                    }
                },
                "required": ["teamName"]
            }),
        },
        Tool {
            name: "get_team_form".to_string(),
            description: "Summarize a football team's recent form: W/D/L sequence, points and win rate over the last matches.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "teamName": team_name_schema(),
                    "limit": {
                        "type": "number",
                        "description": "Number of matches to analyze (default: 5, max: 10)"
                    }
                },
                "required": ["teamName"]
            }),
        },
        Tool {
            name: "get_team_squad".to_string(),
            description: "Get a football team's squad grouped by position, with shirt number, nationality and age.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "teamName": team_name_schema()
                },
                "required": ["teamName"]
            }),
        },
        Tool {
            name: "get_team_info".to_string(),
            description: "Get information about a football team: full and short name, founding year, club colors, venue and website.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "teamName": team_name_schema()
                },
                "required": ["teamName"]
            }),
        },
        Tool {
            name: "get_standings".to_string(),
            description: "Get the league table for a competition: position, played, won, drawn, lost, goals, goal difference, points and form.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "competitionCode": competition_code_schema()
                },
                "required": ["competitionCode"]
            }),
        },
        Tool {
            name: "get_top_scorers".to_string(),
            description: "Get the top goal scorers in a competition.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "competitionCode": competition_code_schema(),
                    "limit": {
                        "type": "number",
                        "description": "Number of scorers to return (default: 10, max: 20)"
                    }
                },
                "required": ["competitionCode"]
            }),
        },
        Tool {
            name: "get_competitions".to_string(),
            description: "List the competitions available from football-data.org with their codes, types and ids.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    ctx: &super::Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    log::debug!("tools/call {} {:?}", params.name, params.arguments);

    match params.name.as_str() {
        "get_team_next_match" => football::handle_next_match(params.arguments, ctx).await,
        "get_live_matches" => football::handle_live_matches(ctx).await,
        "get_matches_by_date" => football::handle_matches_by_date(params.arguments, ctx).await,
        "get_team_results" => football::handle_team_results(params.arguments, ctx).await,
        "get_team_form" => football::handle_team_form(params.arguments, ctx).await,
        "get_team_squad" => football::handle_team_squad(params.arguments, ctx).await,
        "get_team_info" => football::handle_team_info(params.arguments, ctx).await,
        "get_standings" => football::handle_standings(params.arguments, ctx).await,
        "get_top_scorers" => football::handle_top_scorers(params.arguments, ctx).await,
        "get_competitions" => football::handle_competitions(ctx).await,
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}
