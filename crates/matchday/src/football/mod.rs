//! football-data.org gateway and the orchestrators behind every report

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use matchday_core::models::{Team, TeamsResponse};
use matchday_core::resolve::find_team_in_list;
use matchday_core::validate::DEFAULT_ROSTER_LIMIT;
use matchday_core::Outcome;
use serde::de::DeserializeOwned;

pub mod matches;
pub mod stats;
pub mod teams;

/// football-data.org configuration resolved from flags and environment
#[derive(Debug, Clone)]
pub struct FootballConfig {
    pub base_url: String,
    pub api_key: String,
}

impl FootballConfig {
    /// Default football-data.org v4 API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://api.football-data.org/v4";

    /// Build the configuration from global flags
    ///
    /// Both flags fall back to `FOOTBALL_API_KEY` and `FOOTBALL_API_BASE_URL`.
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let api_key = global
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| eyre!("FOOTBALL_API_KEY environment variable not set"))?;

        Ok(Self {
            base_url: global.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// Authenticated gateway to the football-data.org API
///
/// Each call is a single GET with no retries. The client holds no state
/// besides connection settings, so it is shared by reference.
#[derive(Debug, Clone)]
pub struct FootballClient {
    http: reqwest::Client,
    base_url: String,
}

impl FootballClient {
    pub fn new(config: &FootballConfig) -> Result<Self> {
        use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Auth-Token",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` relative to the base URL and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let path = path.trim_start_matches('/').to_string();
        let url = format!("{}/{path}", self.base_url);

        log::debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GatewayError::Network {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                path,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GatewayError::Decode {
            path,
            message: e.to_string(),
        })
    }

    /// Fetch the team roster and pick the first team whose name contains `team_name`
    pub async fn resolve_team(&self, team_name: &str) -> Result<Option<Team>, GatewayError> {
        let roster: TeamsResponse = self
            .get("teams", &[("limit", DEFAULT_ROSTER_LIMIT.to_string())])
            .await?;

        Ok(find_team_in_list(&roster.teams, team_name).cloned())
    }
}

/// Collapse an orchestration result into an outcome, logging any failure
pub(crate) fn settle(result: Result<Outcome, GatewayError>, subject: &str) -> Outcome {
    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("Error fetching {subject}: {err}");
            err.into_outcome(subject)
        }
    }
}

/// Build a client from the global flags
pub(crate) fn client_from_global(global: &crate::Global) -> Result<FootballClient> {
    let config = FootballConfig::from_global(global)?;
    if global.verbose {
        eprintln!("football-data.org API Base: {}", config.base_url);
        eprintln!();
    }
    FootballClient::new(&config)
}

/// Print an outcome for the CLI
///
/// Reports go to stdout. Failures go to stderr in red and produce an error
/// so the process exits non-zero.
pub(crate) fn print_outcome(outcome: Outcome, global: &crate::Global) -> Result<()> {
    if global.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_error() {
        eprintln!("{}", outcome.to_string().red());
    } else {
        println!("{outcome}");
    }

    if outcome.is_error() {
        return Err(eyre!("Command failed"));
    }
    Ok(())
}
