//! Records returned by the Asana API
//!
//! Every record is a snapshot identified by an opaque `gid`. Which optional
//! fields are filled in depends on the `opt_fields` projection of the request
//! that fetched it.

mod attachment;
mod project;
mod story;
mod task;
mod user;

pub use attachment::Attachment;
pub use project::Project;
pub use story::Story;
pub use task::{Entity, Task};
pub use user::User;
