//! Append-only version history with a navigation cursor.

use crate::types::Version;

/// Linearly-indexed history of generated artifacts.
///
/// Append-only: versions are never deleted or reordered in-session. A cursor
/// selects the active version for display; navigating the cursor never
/// alters the sequence. Invariant: the cursor is a valid index whenever the
/// history is non-empty.
#[derive(Debug, Default)]
pub struct VersionHistory {
    versions: Vec<Version>,
    cursor: usize,
}

impl VersionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version and move the cursor to it. Returns the new index.
    pub fn commit(&mut self, version: Version) -> usize {
        self.versions.push(version);
        self.cursor = self.versions.len() - 1;
        self.cursor
    }

    /// Move the cursor to `index`. Out-of-range indices are rejected.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.versions.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Step the cursor toward older versions; no-op at the lower bound.
    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Step the cursor toward newer versions; no-op at the upper bound.
    pub fn forward(&mut self) {
        if self.cursor + 1 < self.versions.len() {
            self.cursor += 1;
        }
    }

    /// The version under the cursor, if any.
    pub fn current(&self) -> Option<&Version> {
        self.versions.get(self.cursor)
    }

    /// The cursor position. Undefined (None) while the history is empty.
    pub fn current_index(&self) -> Option<usize> {
        if self.versions.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn get(&self, index: usize) -> Option<&Version> {
        self.versions.get(index)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Turn;

    fn version(artifact: &str) -> Version {
        Version::new(artifact, "desc", vec![Turn::user("desc")])
    }

    #[test]
    fn empty_history_has_no_cursor() {
        let history = VersionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.current_index(), None);
        assert!(history.current().is_none());
    }

    #[test]
    fn commit_moves_cursor_to_tail() {
        let mut history = VersionHistory::new();
        assert_eq!(history.commit(version("<svg>1</svg>")), 0);
        assert_eq!(history.commit(version("<svg>2</svg>")), 1);

        // Park the cursor on an older version, then commit again.
        history.select(0);
        assert_eq!(history.commit(version("<svg>3</svg>")), 2);
        assert_eq!(history.current_index(), Some(2));
        assert_eq!(history.current().unwrap().artifact, "<svg>3</svg>");
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut history = VersionHistory::new();
        history.commit(version("<svg/>"));
        assert!(!history.select(1));
        assert_eq!(history.current_index(), Some(0));
    }

    #[test]
    fn navigation_clamps_at_bounds() {
        let mut history = VersionHistory::new();
        for i in 0..3 {
            history.commit(version(&format!("<svg>{i}</svg>")));
        }

        history.select(0);
        history.back();
        assert_eq!(history.current_index(), Some(0));

        history.select(2);
        history.forward();
        assert_eq!(history.current_index(), Some(2));
    }

    #[test]
    fn navigation_leaves_contents_untouched() {
        let mut history = VersionHistory::new();
        history.commit(version("<svg>1</svg>"));
        history.commit(version("<svg>2</svg>"));
        let before: Vec<_> = history.iter().map(|v| v.id).collect();

        history.back();
        history.forward();
        history.select(0);

        let after: Vec<_> = history.iter().map(|v| v.id).collect();
        assert_eq!(before, after);
        assert_eq!(history.len(), 2);
    }
}
