//! Shared HTTP client and header/status helpers.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::VellumError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build Anthropic-style headers (x-api-key).
pub fn anthropic_headers(api_key: &str, version: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(api_key) {
        headers.insert("x-api-key", val);
    }
    if let Ok(val) = HeaderValue::from_str(version) {
        headers.insert("anthropic-version", val);
    }
    headers
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> VellumError {
    match status {
        401 | 403 => VellumError::Authentication(body.to_string()),
        _ => VellumError::api(status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication() {
        assert!(matches!(
            status_to_error(401, "no key"),
            VellumError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(500, "boom"),
            VellumError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn anthropic_headers_carry_key_and_version() {
        let headers = anthropic_headers("sk-test", "2023-06-01");
        assert_eq!(headers.get("x-api-key").unwrap(), "sk-test");
        assert_eq!(headers.get("anthropic-version").unwrap(), "2023-06-01");
    }
}
