//! Story model
//!
//! Stories are the activity feed of a task: comments plus system events
//! such as assignment or due date changes.

use serde::{Deserialize, Serialize};

use super::User;

/// A comment or activity entry on a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier
    pub gid: String,

    /// When the story was created (RFC3339)
    #[serde(default)]
    pub created_at: String,

    /// Author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,

    /// Plain-text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Rich-text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_text: Option<String>,

    /// Story kind (`comment` or `system`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Finer-grained kind (e.g. `comment_added`, `assigned`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_subtype: Option<String>,
}

impl Story {
    /// Author name, or `Unknown` for system stories without an author
    #[must_use]
    pub fn author(&self) -> &str {
        self.created_by
            .as_ref()
            .map_or("Unknown", |user| user.name.as_str())
    }
}
