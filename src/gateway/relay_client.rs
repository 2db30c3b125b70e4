//! Gateway that talks to the local relay endpoint instead of the backend.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, VellumError};
use crate::types::Turn;

use super::http::shared_client;
use super::ModelGateway;

/// Client side of the `POST /api/chat` relay contract.
///
/// Sends `{ "messages": [...] }` as JSON, treats any non-2xx response as a
/// transport failure, and extracts the reply text from the first content
/// element of a successful response.
pub struct RelayGateway {
    endpoint: String,
}

impl RelayGateway {
    /// `endpoint` is the full URL of the relay's chat route,
    /// e.g. `http://localhost:3000/api/chat`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ModelGateway for RelayGateway {
    async fn send(&self, context: &[Turn]) -> Result<String> {
        debug!(endpoint = %self.endpoint, turns = context.len(), "relay send");

        let resp = shared_client()
            .post(&self.endpoint)
            .json(&serde_json::json!({ "messages": context }))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(VellumError::api(status, body_text));
        }

        let data: RelayResponse = resp.json().await?;
        let text = data
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| {
                VellumError::api(status, "relay response carried no content blocks")
            })?;

        Ok(text)
    }
}

#[derive(Deserialize)]
struct RelayResponse {
    #[serde(default)]
    content: Vec<RelayContentBlock>,
}

#[derive(Deserialize)]
struct RelayContentBlock {
    #[serde(default)]
    text: String,
}
