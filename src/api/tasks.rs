//! Task, story, and summary operations

use reqwest::Method;

use super::client::Client;
use super::error::ApiError;
use super::types::{CommentRequest, CreateTaskRequest, UpdateTaskRequest};
use crate::models::{Story, Task};
use crate::query::{self, TaskListOptions};
use crate::summary::TaskSummary;

/// Fields requested for a single task
pub const TASK_FIELDS: &str = "gid,name,notes,html_notes,completed,completed_at,due_on,due_at,created_at,modified_at,assignee,assignee.name,assignee.email,projects,projects.name,tags,tags.name,permalink_url";

/// Fields requested for task stories
pub const STORY_FIELDS: &str =
    "gid,created_at,created_by,created_by.name,text,html_text,type,resource_subtype";

impl Client {
    fn search_path(&self) -> String {
        format!("/workspaces/{}/tasks/search", self.workspace())
    }

    /// List tasks matching `options` (first page only)
    pub fn list_tasks(&self, options: &TaskListOptions) -> Result<Vec<Task>, ApiError> {
        let params = query::task_list_params(options, query::today());
        self.get(&self.search_path(), &params)
    }

    /// Search open tasks by free text
    pub fn search_tasks(&self, text: &str, limit: usize) -> Result<Vec<Task>, ApiError> {
        let params = query::search_params(text, limit);
        self.get(&self.search_path(), &params)
    }

    /// Fetch one task with its full field projection
    pub fn get_task(&self, gid: &str) -> Result<Task, ApiError> {
        self.get(
            &format!("/tasks/{gid}"),
            &[("opt_fields", TASK_FIELDS.to_string())],
        )
    }

    /// Create a task. Tasks without projects or a parent are created in the
    /// client's workspace.
    pub fn create_task(&self, mut request: CreateTaskRequest) -> Result<Task, ApiError> {
        if request.needs_workspace() {
            request.workspace = Some(self.workspace().to_string());
        }
        self.send(Method::POST, "/tasks", request)
    }

    /// Apply an update to a task
    pub fn update_task(&self, gid: &str, request: &UpdateTaskRequest) -> Result<Task, ApiError> {
        self.send(Method::PUT, &format!("/tasks/{gid}"), request)
    }

    /// Mark a task complete
    pub fn complete_task(&self, gid: &str) -> Result<Task, ApiError> {
        self.update_task(gid, &UpdateTaskRequest::completion(true))
    }

    /// Mark a task incomplete
    pub fn reopen_task(&self, gid: &str) -> Result<Task, ApiError> {
        self.update_task(gid, &UpdateTaskRequest::completion(false))
    }

    /// Delete a task
    pub fn delete_task(&self, gid: &str) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{gid}"))
    }

    /// Comments and activity on a task
    pub fn task_stories(&self, gid: &str) -> Result<Vec<Story>, ApiError> {
        self.get(
            &format!("/tasks/{gid}/stories"),
            &[("opt_fields", STORY_FIELDS.to_string())],
        )
    }

    /// Add a comment to a task
    pub fn add_comment(&self, task_gid: &str, comment: &CommentRequest) -> Result<Story, ApiError> {
        self.send(Method::POST, &format!("/tasks/{task_gid}/stories"), comment)
    }

    /// Delete a comment
    pub fn delete_story(&self, story_gid: &str) -> Result<(), ApiError> {
        self.delete(&format!("/stories/{story_gid}"))
    }

    /// Summarize the first page of tasks in a project, or of tasks modified in
    /// the last year when no project is given
    pub fn task_summary(&self, project: Option<&str>) -> Result<TaskSummary, ApiError> {
        let today = query::today();
        let params = query::summary_params(project, today);
        let tasks: Vec<Task> = self.get(&self.search_path(), &params)?;
        Ok(TaskSummary::from_tasks(&tasks, today))
    }
}
