//! CLI definitions and entry point

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use asana::api::Client;
use asana::config::Config;
use asana::output::OutputMode;

use crate::commands;

/// asana - A command-line interface for Asana
#[derive(Parser, Debug)]
#[command(
    name = "asana",
    version,
    about = "A command-line interface for Asana",
    long_about = "A command-line interface for Asana.\n\n\
                  Reads ASANA_TOKEN and ASANA_WORKSPACE from the environment or a .env file.\n\
                  Run 'asana configure' for setup help."
)]
pub struct Cli {
    /// Path to config file (.env format)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(short, long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// List workspace users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage task attachments
    Attachments {
        #[command(subcommand)]
        action: AttachmentAction,
    },

    /// Show task counts by status and assignee
    Summary {
        /// Filter by project GID
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Show configuration help
    Configure,

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks
    List {
        /// Show only tasks assigned to me (shortcut for -a me)
        #[arg(short, long)]
        mine: bool,

        /// Filter by project GID
        #[arg(short, long)]
        project: Option<String>,

        /// Filter by assignee GID (use 'me' for yourself)
        #[arg(short, long)]
        assignee: Option<String>,

        /// Filter by tag GID
        #[arg(short, long)]
        tag: Option<String>,

        /// Filter by due date: today, tomorrow, week, overdue, or YYYY-MM-DD
        #[arg(short, long)]
        due: Option<String>,

        /// Include completed tasks
        #[arg(long)]
        all: bool,

        /// Maximum number of tasks to return
        #[arg(short, long, default_value_t = 100)]
        limit: usize,

        /// Sort by: due_date, created_at, modified_at, likes, completed_at
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Get a task by ID
    Get {
        /// Task GID
        gid: String,

        /// Include comments and activity
        #[arg(long)]
        comments: bool,
    },

    /// Create a new task
    Create {
        /// Task name
        name: String,

        /// Task description
        #[arg(short, long)]
        notes: Option<String>,

        /// Assignee GID or 'me'
        #[arg(short, long)]
        assignee: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// Project GID to add the task to
        #[arg(short, long)]
        project: Option<String>,

        /// Parent task GID (creates a subtask)
        #[arg(long)]
        parent: Option<String>,

        /// Tag GID (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a task
    Update {
        /// Task GID
        gid: String,

        /// New task name
        #[arg(short, long)]
        name: Option<String>,

        /// New task description
        #[arg(long)]
        notes: Option<String>,

        /// New assignee GID or 'me'
        #[arg(short, long, conflicts_with = "unassign")]
        assignee: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the assignee
        #[arg(long)]
        unassign: bool,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Mark a task as complete
    Complete {
        /// Task GID
        gid: String,
    },

    /// Reopen a completed task
    Reopen {
        /// Task GID
        gid: String,
    },

    /// Delete a task
    Delete {
        /// Task GID
        gid: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Add a comment to a task
    Comment {
        /// Task GID
        gid: String,

        /// Comment message (use --html for rich text)
        message: String,

        /// Treat message as HTML rich text
        #[arg(long)]
        html: bool,
    },

    /// Delete a comment
    Uncomment {
        /// Story (comment) GID
        story_gid: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Search open tasks by text
    Search {
        /// Search query
        query: String,

        /// Maximum number of tasks to return
        #[arg(short, long, default_value_t = 100)]
        limit: usize,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ProjectAction {
    /// List projects in the workspace
    List {
        /// Show archived projects
        #[arg(short, long)]
        archived: bool,

        /// Maximum number of projects to return
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum UserAction {
    /// List users in the workspace
    List,

    /// Show the current user
    Me,
}

#[derive(Subcommand, Debug)]
pub enum AttachmentAction {
    /// List attachments on a task
    List {
        /// Task GID
        task_gid: String,
    },

    /// Get attachment details
    Get {
        /// Attachment GID
        gid: String,
    },

    /// Upload a file to a task
    Upload {
        /// Task GID
        task_gid: String,

        /// Path to the file to upload
        file: PathBuf,
    },

    /// Download an attachment
    Download {
        /// Attachment GID
        gid: String,

        /// Output path (defaults to the attachment name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete an attachment
    Delete {
        /// Attachment GID
        gid: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("asana-cli v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Command::Configure => {
            commands::configure();
            Ok(())
        },
        command => {
            let config = Config::load(cli.config.as_deref())?;
            let client = Client::new(&config)?;
            dispatch(&client, command, output_mode)
        },
    }
}

fn dispatch(client: &Client, command: Command, mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Command::Tasks { action } => commands::task_cmd(client, action, mode),
        Command::Projects { action } => commands::project_cmd(client, action, mode),
        Command::Users { action } => commands::user_cmd(client, action, mode),
        Command::Attachments { action } => commands::attachment_cmd(client, action, mode),
        Command::Summary { project } => commands::summary(client, project.as_deref(), mode),
        Command::Configure | Command::Version => Ok(()),
    }
}
