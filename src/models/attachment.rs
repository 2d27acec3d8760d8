//! Attachment model

use std::ffi::OsStr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Entity;

/// A file attached to a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique identifier
    pub gid: String,

    /// File name
    #[serde(default)]
    pub name: String,

    /// Storage kind (`asana`, `dropbox`, `gdrive`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_subtype: Option<String>,

    /// When the attachment was created (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Time-limited pre-signed download URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Stable URL that requires an Asana session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_url: Option<String>,

    /// Browser preview URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,

    /// Hosting service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Record the attachment belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Entity>,
}

impl Attachment {
    /// Last path component of the attachment name.
    ///
    /// `None` when the name has no usable file name (empty, `.`, `..`, or
    /// ending in a separator). Directory parts and absolute prefixes are
    /// dropped, so the result never leaves the directory it is joined to.
    #[must_use]
    pub fn local_file_name(&self) -> Option<&OsStr> {
        Path::new(&self.name).file_name()
    }
}
