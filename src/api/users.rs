//! User operations

use super::client::Client;
use super::error::ApiError;
use crate::models::User;

const USER_FIELDS: &str = "gid,name,email";

impl Client {
    /// List users in the workspace
    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(
            &format!("/workspaces/{}/users", self.workspace()),
            &[("opt_fields", USER_FIELDS.to_string())],
        )
    }

    /// The user that owns the token
    pub fn me(&self) -> Result<User, ApiError> {
        self.get("/users/me", &[("opt_fields", USER_FIELDS.to_string())])
    }
}
