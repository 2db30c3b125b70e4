//! HTTP relay: forwards chat requests to the Anthropic backend.
//!
//! The browser-facing counterpart of [`RelayGateway`]: clients post their
//! conversation here and the relay attaches the credential, the fixed system
//! directive, and the fixed generation parameters before calling upstream.
//!
//! [`RelayGateway`]: crate::gateway::relay_client::RelayGateway

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::config::VellumConfig;
use crate::gateway::anthropic::build_request_body;
use crate::gateway::http::{anthropic_headers, shared_client};
use crate::types::Turn;

const API_VERSION: &str = "2023-06-01";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Shared state for the relay routes.
#[derive(Clone)]
pub struct RelayState {
    /// May be empty; the backend then rejects each call with an auth error.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl RelayState {
    pub fn from_config(config: &VellumConfig) -> Self {
        Self {
            api_key: config.api_key.clone().unwrap_or_default(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
        }
    }
}

/// Build the relay router.
pub fn create_app(state: RelayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

/// Bind and serve the relay on `port`.
pub async fn serve(state: RelayState, port: u16) -> crate::error::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Deserialize)]
struct ChatRequest {
    messages: Vec<Turn>,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "vellum-relay",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /api/chat`: forward the conversation upstream and return the
/// backend's response body verbatim on success.
async fn chat(
    State(state): State<RelayState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let body = build_request_body(&state.model, &req.messages);
    let url = format!("{}/messages", state.base_url);

    let resp = shared_client()
        .post(&url)
        .headers(anthropic_headers(&state.api_key, API_VERSION))
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            error!(error = %err, "backend call failed");
            relay_error()
        })?;

    let status = resp.status().as_u16();
    let payload = resp.text().await.unwrap_or_default();
    if status != 200 {
        error!(status, body = %payload, "backend returned non-success");
        return Err(relay_error());
    }

    let value: Value = serde_json::from_str(&payload).map_err(|err| {
        error!(error = %err, "backend returned unparseable body");
        relay_error()
    })?;
    Ok(Json(value))
}

/// Fixed user-facing failure shape; technical detail stays in the logs.
fn relay_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": "Failed to process request" })),
    )
}
