//! Line-delimited JSON-RPC over stdin and stdout

use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Serve JSON-RPC requests line by line until stdin closes
///
/// Only responses are written to stdout; diagnostics go to stderr.
pub async fn run_stdio(ctx: super::Context) -> Result<()> {
    if ctx.global.verbose {
        eprintln!("Starting MatchDay MCP server with stdio transport...");
        eprintln!();
    }
    log::info!("MatchDay MCP server listening on stdio");

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if ctx.global.verbose {
            eprintln!("Received: {trimmed}");
        }

        let response = super::handle_request(trimmed, &ctx).await;
        let response_json = serde_json::to_string(&response)?;

        if ctx.global.verbose {
            eprintln!("Sending: {response_json}");
        }

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
