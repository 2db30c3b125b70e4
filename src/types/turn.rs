//! Conversation turns exchanged with the model backend.

use serde::{Deserialize, Serialize};

/// A single turn in a conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let turn = Turn::user("draw a tree");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "draw a tree");

        let turn = Turn::assistant("<svg></svg>");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn turn_round_trips_through_json() {
        let turn = Turn::assistant("<svg><rect/></svg>");
        let back: Turn = serde_json::from_str(&serde_json::to_string(&turn).unwrap()).unwrap();
        assert_eq!(back, turn);
    }
}
