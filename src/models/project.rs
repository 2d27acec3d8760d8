//! Project model

use serde::{Deserialize, Serialize};

/// A project in the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub gid: String,

    /// Project name
    #[serde(default)]
    pub name: String,

    /// Whether the project is archived
    #[serde(default)]
    pub archived: bool,

    /// Color label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// When the project was created (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Link to the project in the Asana web app
    #[serde(rename = "permalink_url", default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}
