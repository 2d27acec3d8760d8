//! Attachment operations

use std::path::Path;

use super::client::{Client, decode};
use super::error::ApiError;
use crate::models::Attachment;

/// Fields requested when listing attachments
pub const ATTACHMENT_LIST_FIELDS: &str = "gid,name,resource_subtype,created_at,host,size";

/// Fields requested for a single attachment
pub const ATTACHMENT_FIELDS: &str = "gid,name,resource_subtype,created_at,download_url,permanent_url,view_url,host,size,parent,parent.name";

impl Client {
    /// Attachments on a task
    pub fn list_attachments(&self, task_gid: &str) -> Result<Vec<Attachment>, ApiError> {
        self.get(
            &format!("/tasks/{task_gid}/attachments"),
            &[("opt_fields", ATTACHMENT_LIST_FIELDS.to_string())],
        )
    }

    /// One attachment, including its download URL
    pub fn get_attachment(&self, gid: &str) -> Result<Attachment, ApiError> {
        self.get(
            &format!("/attachments/{gid}"),
            &[("opt_fields", ATTACHMENT_FIELDS.to_string())],
        )
    }

    /// Upload a local file to a task
    pub fn upload_attachment(&self, task_gid: &str, file: &Path) -> Result<Attachment, ApiError> {
        let body = self.upload_multipart(&format!("/tasks/{task_gid}/attachments"), file)?;
        decode(&body)
    }

    /// Download an attachment's content to `destination`
    pub fn download_attachment(
        &self,
        attachment: &Attachment,
        destination: &Path,
    ) -> Result<u64, ApiError> {
        self.download(attachment.download_url.as_deref().unwrap_or_default(), destination)
    }

    /// Delete an attachment
    pub fn delete_attachment(&self, gid: &str) -> Result<(), ApiError> {
        self.delete(&format!("/attachments/{gid}"))
    }
}
