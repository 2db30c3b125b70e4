//! Generated artifact versions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::turn::Turn;

/// One committed artifact in the version history.
///
/// Immutable once created: refinements always produce a *new* `Version`,
/// never mutate an existing one. `context` stores, by value, the exact
/// conversation that was sent to the backend to produce this artifact —
/// a subset of the session-wide conversation log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Version {
    pub id: Uuid,
    /// The SVG document, verbatim as extracted from the model reply.
    pub artifact: String,
    /// The user request that produced this version.
    pub source_description: String,
    pub created_at: DateTime<Utc>,
    /// The conversation sent to the backend for this version.
    pub context: Vec<Turn>,
}

impl Version {
    /// Create a new version with a fresh id and the current timestamp.
    pub fn new(
        artifact: impl Into<String>,
        source_description: impl Into<String>,
        context: Vec<Turn>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            artifact: artifact.into(),
            source_description: source_description.into(),
            created_at: Utc::now(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_versions_get_distinct_ids() {
        let a = Version::new("<svg/>", "a circle", vec![Turn::user("a circle")]);
        let b = Version::new("<svg/>", "a circle", vec![Turn::user("a circle")]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn version_serializes_context_by_value() {
        let v = Version::new("<svg/>", "a tree", vec![Turn::user("a tree")]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["context"][0]["role"], "user");
        assert_eq!(json["source_description"], "a tree");
    }
}
