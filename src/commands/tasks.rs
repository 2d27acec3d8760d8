//! Tasks command - list, inspect, and change tasks

use colored::Colorize;

use asana::api::{Client, CommentRequest, CreateTaskRequest, Field, UpdateTaskRequest};
use asana::models::{Attachment, Story, Task};
use asana::output::{self, OutputMode, Table};
use asana::query::{self, DueFilter, TaskListOptions};

use super::confirm;
use crate::cli::TaskAction;

/// Longest task name shown in tables
const NAME_WIDTH: usize = 50;

/// Handle task subcommands
pub fn task_cmd(client: &Client, action: TaskAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        TaskAction::List {
            mine,
            project,
            assignee,
            tag,
            due,
            all,
            limit,
            sort,
        } => {
            let options = TaskListOptions {
                project,
                assignee: if mine { Some("me".to_string()) } else { assignee },
                tag,
                due: due.map(|d| d.parse::<DueFilter>()).transpose()?,
                include_completed: all,
                limit,
                sort_by: sort,
            };
            list(client, &options, mode)
        },
        TaskAction::Get { gid, comments } => get(client, &gid, comments, mode),
        TaskAction::Create {
            name,
            notes,
            assignee,
            due,
            project,
            parent,
            tags,
        } => {
            let request = CreateTaskRequest {
                name,
                notes,
                assignee,
                due_on: due,
                projects: project.into_iter().collect(),
                tags,
                parent,
                workspace: None,
            };
            create(client, request, mode)
        },
        TaskAction::Update {
            gid,
            name,
            notes,
            assignee,
            due,
            unassign,
            clear_due,
        } => {
            let request = UpdateTaskRequest {
                name: name.into(),
                notes: notes.into(),
                assignee: if unassign { Field::Set(None) } else { assignee.map(Some).into() },
                due_on: if clear_due { Field::Set(None) } else { due.map(Some).into() },
                completed: Field::Unset,
            };
            update(client, &gid, &request, mode)
        },
        TaskAction::Complete { gid } => {
            let task = client.complete_task(&gid)?;
            report(&task, "Task completed", mode)
        },
        TaskAction::Reopen { gid } => {
            let task = client.reopen_task(&gid)?;
            report(&task, "Task reopened", mode)
        },
        TaskAction::Delete { gid, force } => delete(client, &gid, force, mode),
        TaskAction::Comment { gid, message, html } => comment(client, &gid, &message, html, mode),
        TaskAction::Uncomment { story_gid, force } => uncomment(client, &story_gid, force, mode),
        TaskAction::Search { query: text, limit } => {
            let tasks = client.search_tasks(&text, limit)?;
            render_tasks(&tasks, query::effective_limit(limit), mode)
        },
    }
}

fn list(client: &Client, options: &TaskListOptions, mode: OutputMode) -> anyhow::Result<()> {
    let tasks = client.list_tasks(options)?;
    render_tasks(&tasks, query::effective_limit(options.limit), mode)
}

fn render_tasks(tasks: &[Task], limit: usize, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        output::print_json(tasks)?;
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let mut table = Table::new(["GID", "NAME", "DUE", "ASSIGNEE", "PROJECT"]);
    for task in tasks {
        table.row([
            task.gid.clone(),
            output::truncate(&task.name, NAME_WIDTH),
            output::or_dash(task.due_on.as_deref()).to_string(),
            output::or_dash(task.assignee_name()).to_string(),
            output::or_dash(task.first_project()).to_string(),
        ]);
    }
    print!("{}", table.render());

    if tasks.len() >= limit {
        println!("\n(Showing {limit} tasks, use -l to increase limit)");
    }
    Ok(())
}

fn get(client: &Client, gid: &str, with_comments: bool, mode: OutputMode) -> anyhow::Result<()> {
    let task = client.get_task(gid)?;
    let stories = if with_comments {
        client.task_stories(gid)?
    } else {
        Vec::new()
    };
    let attachments = client.list_attachments(gid)?;

    if mode == OutputMode::Json {
        let mut value = serde_json::json!({
            "task": task,
            "attachments": attachments,
        });
        if with_comments {
            value["comments"] = serde_json::to_value(&stories)?;
        }
        output::print_json(&value)?;
        return Ok(());
    }

    print_task(&task);
    print_attachments(&attachments);
    if with_comments {
        print_stories(&stories);
    }
    Ok(())
}

fn print_task(task: &Task) {
    println!("Task: {}", task.name.bold());
    println!("GID: {}", task.gid);

    let status = if task.completed {
        task.status().green()
    } else {
        task.status().yellow()
    };
    println!("Status: {status}");

    if let Some(assignee) = &task.assignee {
        let email = assignee
            .email
            .as_ref()
            .map(|email| format!(" <{email}>"))
            .unwrap_or_default();
        println!("Assignee: {}{email}", assignee.name);
    }

    if let Some(due) = &task.due_on {
        let today = query::format_date(query::today());
        if !task.completed && due.as_str() < today.as_str() {
            println!("Due: {} (overdue)", due.red());
        } else {
            println!("Due: {due}");
        }
    }

    if !task.projects.is_empty() {
        let names: Vec<&str> = task.projects.iter().map(|p| p.name.as_str()).collect();
        println!("Projects: {}", names.join(", "));
    }
    if !task.tags.is_empty() {
        let names: Vec<&str> = task.tags.iter().map(|t| t.name.as_str()).collect();
        println!("Tags: {}", names.join(", "));
    }

    println!("Created: {}", output::or_dash(task.created_at.as_deref()));
    println!("Modified: {}", output::or_dash(task.modified_at.as_deref()));

    if let Some(url) = &task.permalink {
        println!("URL: {url}");
    }

    if let Some(notes) = task.notes.as_deref().filter(|n| !n.is_empty()) {
        println!("\nDescription:\n{notes}");
    }
}

fn print_attachments(attachments: &[Attachment]) {
    if attachments.is_empty() {
        return;
    }

    println!("\nAttachments ({}):", attachments.len());
    for attachment in attachments {
        let size = attachment
            .size
            .filter(|s| *s > 0)
            .map(|s| format!(" ({})", output::format_size(s)))
            .unwrap_or_default();
        println!("  - {}{size} [{}]", attachment.name, attachment.gid);
    }
}

fn print_stories(stories: &[Story]) {
    if stories.is_empty() {
        return;
    }

    println!("\nComments & Activity ({}):", stories.len());
    println!("{}", "-".repeat(40));
    for story in stories {
        println!(
            "[{}] {}",
            output::date_part(Some(story.created_at.as_str())),
            story.author().bold()
        );
        if let Some(text) = story.text.as_deref().filter(|t| !t.is_empty()) {
            println!("  {text}");
        }
        println!();
    }
}

fn create(client: &Client, request: CreateTaskRequest, mode: OutputMode) -> anyhow::Result<()> {
    let task = client.create_task(request)?;

    if mode == OutputMode::Json {
        output::print_json(&task)?;
        return Ok(());
    }

    println!("Task created successfully!");
    println!("GID: {}", task.gid);
    println!("Name: {}", task.name);
    if let Some(url) = &task.permalink {
        println!("URL: {url}");
    }
    Ok(())
}

fn update(
    client: &Client,
    gid: &str,
    request: &UpdateTaskRequest,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if request.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one of --name, --notes, --assignee, --due, --unassign, --clear-due");
    }

    let task = client.update_task(gid, request)?;
    report(&task, "Task updated", mode)
}

fn report(task: &Task, verb: &str, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        output::print_json(task)?;
    } else {
        println!("{verb}: {}", task.name);
    }
    Ok(())
}

fn delete(client: &Client, gid: &str, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if !force && !confirm(&format!("Are you sure you want to delete task {gid}?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_task(gid)?;

    if mode == OutputMode::Json {
        output::print_json(&serde_json::json!({ "success": true, "gid": gid, "deleted": true }))?;
    } else {
        println!("Task {gid} deleted.");
    }
    Ok(())
}

fn comment(
    client: &Client,
    gid: &str,
    message: &str,
    html: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let request = if html {
        CommentRequest::html(message)
    } else {
        CommentRequest::text(message)
    };
    let story = client.add_comment(gid, &request)?;

    if mode == OutputMode::Json {
        output::print_json(&story)?;
        return Ok(());
    }

    println!("Comment added successfully (ID: {})", story.gid);
    println!("Created at: {}", story.created_at);
    Ok(())
}

fn uncomment(client: &Client, story_gid: &str, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if !force && !confirm(&format!("Are you sure you want to delete comment {story_gid}?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_story(story_gid)?;

    if mode == OutputMode::Json {
        output::print_json(&serde_json::json!({ "success": true, "gid": story_gid, "deleted": true }))?;
    } else {
        println!("Comment {story_gid} deleted.");
    }
    Ok(())
}
