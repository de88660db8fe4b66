use crate::prelude::*;
use clap::Parser;

mod error;
mod football;
mod mcp;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Football fixtures, results, tables and squads from football-data.org"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// football-data.org API token
    #[clap(
        long,
        env = "FOOTBALL_API_KEY",
        global = true,
        hide_env_values = true
    )]
    api_key: Option<String>,

    /// football-data.org API base URL
    #[clap(
        long,
        env = "FOOTBALL_API_BASE_URL",
        global = true,
        default_value = football::FootballConfig::DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Print the tagged outcome as JSON instead of plain text
    #[clap(long, global = true, default_value = "false")]
    json: bool,

    /// Whether to display additional information.
    #[clap(long, env = "MATCHDAY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Fixtures and scores (next match, live, date range)
    #[clap(subcommand)]
    Matches(football::matches::Commands),

    /// Team reports (results, form, squad, info)
    #[clap(subcommand)]
    Teams(football::teams::Commands),

    /// Competition reports (standings, top scorers, competitions)
    #[clap(subcommand)]
    Stats(football::stats::Commands),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Matches(cmd) => football::matches::run(cmd, app.global).await,
        SubCommands::Teams(cmd) => football::teams::run(cmd, app.global).await,
        SubCommands::Stats(cmd) => football::stats::run(cmd, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
