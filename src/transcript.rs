//! Session-wide conversation log.

use crate::types::Turn;

/// The full chat transcript shown to the user.
///
/// Append-only during a session. A superset of any single version's context:
/// it accumulates every user and assistant turn, including synthetic status
/// and failure turns that are UI-only and never replayed to the backend.
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_append_order() {
        let mut log = ConversationLog::new();
        log.push(Turn::user("a circle"));
        log.push(Turn::assistant("Version 1 created."));

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0], Turn::user("a circle"));
        assert_eq!(log.turns()[1], Turn::assistant("Version 1 created."));
    }
}
