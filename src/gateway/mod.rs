//! Model gateway trait and implementations.

pub mod http;

#[cfg(feature = "anthropic")]
pub mod anthropic;

pub mod relay_client;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Turn;

/// Default model serving generation requests.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Output ceiling for a single generation.
pub const MAX_TOKENS: u32 = 4096;

/// Low randomness keeps refinements close to the previous artifact.
pub const TEMPERATURE: f64 = 0.2;

/// Fixed system directive sent with every generation request.
///
/// The backend is instructed to answer with only an SVG document; whether a
/// usable artifact actually came back is checked downstream by the
/// extractor, not here.
pub const SYSTEM_DIRECTIVE: &str = "You are an SVG generation assistant focused on creating clean, visually appealing graphics. Follow these guidelines:\n\n- Only respond with valid SVG code, no explanatory text\n- Ensure text is always readable by preventing shape overlaps with text elements\n- Use appropriate spacing and padding around elements\n- Implement balanced compositions and visual hierarchy\n- Apply consistent styling and color schemes\n- Optimize SVG code for clarity and efficiency\n- SVG should be complete and self-contained";

/// Boundary to the generative backend.
///
/// Stateless: one request per call, single attempt, no retry, no cache. The
/// input context is never mutated. Implementations fail with a transport
/// error when the backend returns a non-success status or the call cannot
/// complete; converting that into a user-visible turn is the caller's job.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send an ordered conversation and return the assistant's reply text.
    async fn send(&self, context: &[Turn]) -> Result<String>;
}
