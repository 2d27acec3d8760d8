//! Task model
//!
//! A task is the main unit of work in Asana. Tasks reference their assignee,
//! the projects they belong to, and their tags.

use serde::{Deserialize, Serialize};

use super::User;

/// A task as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub gid: String,

    /// Task name (absent when not part of the field projection)
    #[serde(default)]
    pub name: String,

    /// Plain-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Rich-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_notes: Option<String>,

    /// Whether the task is marked complete
    #[serde(default)]
    pub completed: bool,

    /// When the task was completed (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Due date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,

    /// Due date and time (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,

    /// When the task was created (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the task was last modified (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,

    /// Assigned user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    /// Projects the task belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Entity>,

    /// Tags on the task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Entity>,

    /// Link to the task in the Asana web app
    #[serde(rename = "permalink_url", default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

/// A compact reference to another record (project, tag, parent)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier
    pub gid: String,

    /// Display name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Task {
    /// Display name of the assignee, if assigned
    #[must_use]
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|user| user.name.as_str())
    }

    /// Name of the first project the task belongs to
    #[must_use]
    pub fn first_project(&self) -> Option<&str> {
        self.projects.first().map(|project| project.name.as_str())
    }

    /// Human status label
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.completed { "Completed" } else { "Open" }
    }
}
