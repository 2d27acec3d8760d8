//! Projects command

use asana::api::Client;
use asana::output::{self, OutputMode, Table};

use crate::cli::ProjectAction;

/// Handle project subcommands
pub fn project_cmd(client: &Client, action: ProjectAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ProjectAction::List { archived, limit } => list(client, archived, limit, mode),
    }
}

fn list(client: &Client, archived: bool, limit: usize, mode: OutputMode) -> anyhow::Result<()> {
    let projects = client.list_projects(archived, limit)?;

    if mode == OutputMode::Json {
        output::print_json(&projects)?;
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    let mut table = Table::new(["GID", "NAME", "ARCHIVED", "CREATED"]);
    for project in &projects {
        table.row([
            project.gid.clone(),
            output::truncate(&project.name, 40),
            if project.archived { "Yes" } else { "No" }.to_string(),
            output::date_part(project.created_at.as_deref()),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
