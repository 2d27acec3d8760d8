//! Asana REST API client
//!
//! ## Design
//!
//! - **One request per call**: every operation is a single blocking HTTP
//!   exchange; nothing is retried, paginated, or cached
//! - **Typed payloads**: request bodies are structs from `types`, responses
//!   decode into `models`
//! - **Errors keep their status**: remote failures carry the HTTP status code
//!   and the API's own message

mod attachments;
mod client;
mod error;
mod projects;
mod tasks;
mod types;
mod users;

pub use attachments::{ATTACHMENT_FIELDS, ATTACHMENT_LIST_FIELDS};
pub use client::{Client, decode};
pub use error::{ApiError, ErrorDetail, ErrorEnvelope};
pub use projects::PROJECT_FIELDS;
pub use tasks::{STORY_FIELDS, TASK_FIELDS};
pub use types::{CommentRequest, CreateTaskRequest, Data, Field, UpdateTaskRequest};
