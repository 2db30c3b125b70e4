//! Anthropic Messages API gateway.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::VellumConfig;
use crate::error::Result;
use crate::types::{Role, Turn};

use super::http::{anthropic_headers, shared_client, status_to_error};
use super::{ModelGateway, DEFAULT_MODEL, MAX_TOKENS, SYSTEM_DIRECTIVE, TEMPERATURE};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";

/// Direct caller of the Anthropic Messages API.
pub struct AnthropicGateway {
    model: String,
    api_key: String,
    base_url: String,
}

impl AnthropicGateway {
    /// An empty `api_key` is accepted; the backend rejects each call with an
    /// auth error, which surfaces as a transport failure.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn from_config(config: &VellumConfig) -> Self {
        Self::new(
            config.model.clone(),
            config.api_key.clone().unwrap_or_default(),
            config.base_url.clone(),
        )
    }
}

impl Default for AnthropicGateway {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, "", None)
    }
}

/// Build the Messages API request body: fixed system directive, bounded
/// output, low randomness.
pub(crate) fn build_request_body(model: &str, messages: &[Turn]) -> serde_json::Value {
    let messages: Vec<serde_json::Value> = messages
        .iter()
        .map(|turn| {
            serde_json::json!({
                "role": match turn.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                },
                "content": turn.content,
            })
        })
        .collect();

    serde_json::json!({
        "model": model,
        "max_tokens": MAX_TOKENS,
        "messages": messages,
        "system": SYSTEM_DIRECTIVE,
        "temperature": TEMPERATURE,
    })
}

#[async_trait]
impl ModelGateway for AnthropicGateway {
    async fn send(&self, context: &[Turn]) -> Result<String> {
        let body = build_request_body(&self.model, context);
        let url = format!("{}/messages", self.base_url);

        debug!(model = %self.model, turns = context.len(), "Anthropic send");

        let resp = shared_client()
            .post(&url)
            .headers(anthropic_headers(&self.api_key, API_VERSION))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: MessagesResponse = resp.json().await?;

        let text = data
            .content
            .iter()
            .filter_map(|block| match block.r#type.as_str() {
                "text" => block.text.as_deref(),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    r#type: String,
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_fixed_parameters() {
        let body = build_request_body(DEFAULT_MODEL, &[Turn::user("a red circle")]);
        assert_eq!(body["model"], DEFAULT_MODEL);
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["temperature"], 0.2);
        assert_eq!(body["system"], SYSTEM_DIRECTIVE);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "a red circle");
    }

    #[test]
    fn request_body_maps_assistant_turns() {
        let context = vec![Turn::assistant("<svg/>"), Turn::user("make it blue")];
        let body = build_request_body("test-model", &context);
        assert_eq!(body["messages"][0]["role"], "assistant");
        assert_eq!(body["messages"][0]["content"], "<svg/>");
        assert_eq!(body["messages"][1]["role"], "user");
    }
}
