//! Convenience re-exports for common use.

pub use crate::config::VellumConfig;
pub use crate::editor::{DisplayState, EditorController, SubmitOutcome};
pub use crate::error::{Result, VellumError};
pub use crate::export::ExportFile;
pub use crate::extract::extract_svg;
pub use crate::gateway::relay_client::RelayGateway;
pub use crate::gateway::ModelGateway;
pub use crate::history::VersionHistory;
pub use crate::transcript::ConversationLog;
pub use crate::types::{Role, Turn, Version};

#[cfg(feature = "anthropic")]
pub use crate::gateway::anthropic::AnthropicGateway;
