//! Summary command - task counts for a project or the whole workspace

use colored::Colorize;

use asana::api::Client;
use asana::output::{self, OutputMode, Table};
use asana::summary::TaskSummary;

/// Fetch and render the task summary
pub fn summary(client: &Client, project: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let summary = client.task_summary(project)?;

    if mode == OutputMode::Json {
        output::print_json(&summary)?;
    } else {
        render_human(&summary);
    }
    Ok(())
}

fn render_human(summary: &TaskSummary) {
    println!("{}", "Task Summary".bold());
    println!("============");
    println!("Total Tasks:     {}", summary.total);
    println!("Open Tasks:      {}", summary.open);
    println!("Completed Tasks: {}", summary.completed);
    if summary.overdue > 0 {
        println!("Overdue Tasks:   {}", summary.overdue.to_string().red());
    } else {
        println!("Overdue Tasks:   {}", summary.overdue);
    }
    println!("Unassigned:      {}", summary.unassigned);

    let assignees = summary.assignees_by_count();
    if assignees.is_empty() {
        return;
    }

    println!("\n{}", "Tasks by Assignee".bold());
    println!("-----------------");
    let mut table = Table::new(["ASSIGNEE", "TASKS"]);
    for (name, count) in assignees {
        table.row([name.to_string(), count.to_string()]);
    }
    print!("{}", table.render());
}
