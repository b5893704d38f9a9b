//! Tag information from the registry
//!
//! This module provides the TagInfo struct that represents an image tag
//! with its last-updated timestamp, and the selection of the "latest"
//! candidate among filtered tags.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fallback tag used when no candidate matches
pub const LATEST_TAG: &str = "latest";

/// Information about an image tag from the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// The tag name (e.g., "1.25.3")
    pub name: String,
    /// When this tag was last pushed. Carried for registry interface
    /// fidelity; selection orders by name only.
    pub last_updated: DateTime<FixedOffset>,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, last_updated: DateTime<FixedOffset>) -> Self {
        Self {
            name: name.into(),
            last_updated,
        }
    }
}

/// Select the latest tag from a filtered candidate list.
///
/// Ordering is plain lexicographic on the tag name, descending; the greatest
/// string wins. This is intentionally not a semantic-version comparison, so
/// `"9.0"` beats `"10.0"`. An empty list yields the literal `"latest"`.
pub fn select_latest(tags: &[TagInfo]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .max()
        .unwrap_or(LATEST_TAG)
        .to_string()
}
