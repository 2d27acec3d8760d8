//! API request payloads and the `data` wrapper
//!
//! Payloads are typed structs; optional attributes are only serialized when
//! set.

use serde::{Deserialize, Serialize, Serializer};

// =============================================================================
// WRAPPER
// =============================================================================

/// The `{"data": ...}` wrapper used by every request and response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data<T> {
    /// Wrapped payload
    pub data: T,
}

// =============================================================================
// FIELD
// =============================================================================

/// An updatable attribute: either left alone or set to a value.
///
/// For nullable attributes use `Field<Option<T>>`: `Set(None)` clears the
/// attribute (serialized as `null`) while `Unset` omits it from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// Not part of the update
    #[default]
    Unset,
    /// Set to this value
    Set(T),
}

impl<T> Field<T> {
    /// Whether the attribute is left out of the payload
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The value, if set
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Unset => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Body for creating a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTaskRequest {
    /// Task name
    pub name: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Assignee GID or `me`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Due date (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
    /// Project GIDs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
    /// Tag GIDs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Parent task GID (creates a subtask)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Workspace GID, required when neither projects nor parent are given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

impl CreateTaskRequest {
    /// Whether the task needs an explicit workspace to land somewhere
    #[must_use]
    pub const fn needs_workspace(&self) -> bool {
        self.projects.is_empty() && self.parent.is_none()
    }
}

/// Body for updating a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTaskRequest {
    /// New name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// New description
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub notes: Field<String>,
    /// New assignee GID or `me`; `Set(None)` unassigns
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub assignee: Field<Option<String>>,
    /// New due date; `Set(None)` clears it
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub due_on: Field<Option<String>>,
    /// Completion state
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub completed: Field<bool>,
}

impl UpdateTaskRequest {
    /// Update that only changes the completion state
    #[must_use]
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Field::Set(completed),
            ..Self::default()
        }
    }

    /// Whether no attribute is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.notes.is_unset()
            && self.assignee.is_unset()
            && self.due_on.is_unset()
            && self.completed.is_unset()
    }
}

/// Body for adding a comment to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommentRequest {
    /// Plain-text comment
    Text {
        /// Comment body
        text: String,
    },
    /// Rich-text comment wrapped in `<body>`
    Html {
        /// Comment body
        html_text: String,
    },
}

impl CommentRequest {
    /// Plain-text comment
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text {
            text: message.into(),
        }
    }

    /// Rich-text comment. The message is wrapped in `<body>` tags unless it
    /// already contains them.
    #[must_use]
    pub fn html(message: &str) -> Self {
        let html_text = if message.contains("<body>") {
            message.to_string()
        } else {
            format!("<body>{message}</body>")
        };
        Self::Html { html_text }
    }
}
