//! HTTP transport: `GET /sse` opens an event stream, `POST /message` carries requests
//!
//! Each stream starts with an `endpoint` event naming the message URL for its
//! session. Requests posted there are answered on the stream as `message`
//! events. A post without `sessionId` is answered in the HTTP response itself.

use crate::prelude::{eprintln, *};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};

pub async fn run_sse(options: super::cli::SseOptions, ctx: super::Context) -> Result<()> {
    let verbose = ctx.global.verbose;
    if verbose {
        eprintln!(
            "Starting MatchDay MCP server with SSE transport on {}:{}...",
            options.host, options.port
        );
    }

    let addr = format!("{}:{}", options.host, options.port);
    let app_router = router(ctx);

    if verbose {
        eprintln!("MCP server listening on http://{}", addr);
        eprintln!("SSE endpoint: http://{}/sse", addr);
        eprintln!("Message endpoint: http://{}/message", addr);
    }
    log::info!("MatchDay MCP server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Open event streams, keyed by session id
struct SseState {
    ctx: super::Context,
    sessions: Mutex<HashMap<String, mpsc::UnboundedSender<String>>>,
    next_session: AtomicU64,
}

impl SseState {
    fn new(ctx: super::Context) -> Self {
        Self {
            ctx,
            sessions: Mutex::new(HashMap::new()),
            next_session: AtomicU64::new(1),
        }
    }

    fn open_session(&self) -> (String, mpsc::UnboundedReceiver<String>) {
        let session_id = format!("{:08x}", self.next_session.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::unbounded_channel();
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(session_id.clone(), tx);
        (session_id, rx)
    }

    fn session(&self, session_id: &str) -> Option<mpsc::UnboundedSender<String>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(session_id)
            .cloned()
    }

    fn close_session(&self, session_id: &str) {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(session_id);
    }
}

fn router(ctx: super::Context) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sse", get(sse_handler))
        .route("/message", post(message_handler))
        .layer(cors)
        .with_state(Arc::new(SseState::new(ctx)))
}

async fn sse_handler(
    State(state): State<Arc<SseState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (session_id, rx) = state.open_session();
    log::debug!("SSE session {session_id} opened");

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("/message?sessionId={session_id}"));

    // Ends once every sender for the session is gone.
    let responses = stream::unfold(rx, |mut rx| async move {
        let message = rx.recv().await?;
        Some((Ok(Event::default().event("message").data(message)), rx))
    });

    let events = stream::once(async move { Ok::<_, Infallible>(endpoint) }).chain(responses);
    Sse::new(events).keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct MessageQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

async fn message_handler(
    State(state): State<Arc<SseState>>,
    Query(query): Query<MessageQuery>,
    Json(request): Json<serde_json::Value>,
) -> Response {
    let Some(session_id) = query.session_id else {
        let response = super::handle_request(&request.to_string(), &state.ctx).await;
        return Json(response).into_response();
    };

    let Some(sender) = state.session(&session_id) else {
        return (StatusCode::NOT_FOUND, format!("Unknown session: {session_id}")).into_response();
    };

    let response = super::handle_request(&request.to_string(), &state.ctx).await;
    let body = match serde_json::to_string(&response) {
        Ok(body) => body,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Serialization error: {e}"))
                .into_response()
        }
    };

    if sender.send(body).is_err() {
        log::debug!("SSE session {session_id} closed by client");
        state.close_session(&session_id);
        return (StatusCode::GONE, format!("Session closed: {session_id}")).into_response();
    }

    StatusCode::ACCEPTED.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::MockServer;

    async fn serve(ctx: super::super::Context) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(ctx)).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn post_json(base: &str, path: &str, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{base}{path}"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
    }

    /// Read the event stream into `buffer` until it contains `needle`
    async fn read_until(response: &mut reqwest::Response, buffer: &mut String, needle: &str) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !buffer.contains(needle) {
                let chunk = response.chunk().await.unwrap().expect("event stream ended");
                buffer.push_str(&String::from_utf8_lossy(&chunk));
            }
        })
        .await
        .expect("timed out waiting for event");
    }

    #[tokio::test]
    async fn test_message_without_session_is_answered_inline() {
        let api = MockServer::start().await;
        let base = serve(super::super::tests::context_for(&api)).await;

        let body = post_json(&base, "/message", json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}))
            .await
            .text()
            .await
            .unwrap();
        let response: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(response["id"], json!(1));
        assert_eq!(response["result"]["tools"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_session_receives_responses_on_stream() {
        let api = MockServer::start().await;
        let base = serve(super::super::tests::context_for(&api)).await;
        let mut stream = reqwest::Client::new()
            .get(format!("{base}/sse"))
            .send()
            .await
            .unwrap();
        assert!(stream.status().is_success());

        let mut buffer = String::new();
        read_until(&mut stream, &mut buffer, "event: endpoint").await;
        read_until(&mut stream, &mut buffer, "\n\n").await;
        let endpoint = buffer
            .lines()
            .find_map(|line| line.strip_prefix("data: "))
            .unwrap()
            .to_string();
        assert!(endpoint.starts_with("/message?sessionId="));

        let posted = post_json(
            &base,
            &endpoint,
            json!({"jsonrpc": "2.0", "id": 9, "method": "initialize"}),
        )
        .await;
        assert_eq!(posted.status(), reqwest::StatusCode::ACCEPTED);

        read_until(&mut stream, &mut buffer, "MatchDay MCP").await;
        assert!(buffer.contains("event: message"));
        assert!(buffer.contains("\"id\":9"));
    }

    #[tokio::test]
    async fn test_message_for_unknown_session() {
        let api = MockServer::start().await;
        let base = serve(super::super::tests::context_for(&api)).await;

        let response = post_json(
            &base,
            "/message?sessionId=deadbeef",
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
        )
        .await;

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }
}
