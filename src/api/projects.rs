//! Project operations

use super::client::Client;
use super::error::ApiError;
use crate::models::Project;
use crate::query::effective_limit;

/// Fields requested when listing projects
pub const PROJECT_FIELDS: &str = "gid,name,archived,color,created_at,permalink_url";

impl Client {
    /// List projects in the workspace with the given archived state
    pub fn list_projects(&self, archived: bool, limit: usize) -> Result<Vec<Project>, ApiError> {
        self.get(
            &format!("/workspaces/{}/projects", self.workspace()),
            &[
                ("archived", archived.to_string()),
                ("limit", effective_limit(limit).to_string()),
                ("opt_fields", PROJECT_FIELDS.to_string()),
            ],
        )
    }
}
