//! Command implementations

mod attachments;
mod configure;
mod projects;
mod summary;
mod tasks;
mod users;

use std::io::{self, BufRead, Write};

pub use attachments::attachment_cmd;
pub use configure::configure;
pub use projects::project_cmd;
pub use summary::summary;
pub use tasks::task_cmd;
pub use users::user_cmd;

/// Ask a yes/no question on stdin. Only `y` or `Y` confirms.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
