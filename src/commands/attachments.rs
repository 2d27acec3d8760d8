//! Attachments command - list, upload, download, delete task files

use std::path::{Path, PathBuf};

use asana::api::Client;
use asana::models::Attachment;
use asana::output::{self, OutputMode, Table};

use super::confirm;
use crate::cli::AttachmentAction;

/// Handle attachment subcommands
pub fn attachment_cmd(
    client: &Client,
    action: AttachmentAction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        AttachmentAction::List { task_gid } => list(client, &task_gid, mode),
        AttachmentAction::Get { gid } => get(client, &gid, mode),
        AttachmentAction::Upload { task_gid, file } => upload(client, &task_gid, &file, mode),
        AttachmentAction::Download { gid, output } => download(client, &gid, output, mode),
        AttachmentAction::Delete { gid, force } => delete(client, &gid, force, mode),
    }
}

fn list(client: &Client, task_gid: &str, mode: OutputMode) -> anyhow::Result<()> {
    let attachments = client.list_attachments(task_gid)?;

    if mode == OutputMode::Json {
        output::print_json(&attachments)?;
        return Ok(());
    }

    if attachments.is_empty() {
        println!("No attachments found.");
        return Ok(());
    }

    let mut table = Table::new(["GID", "NAME", "SIZE", "CREATED", "HOST"]);
    for attachment in &attachments {
        table.row([
            attachment.gid.clone(),
            output::truncate(&attachment.name, 50),
            attachment
                .size
                .filter(|s| *s > 0)
                .map_or_else(|| "-".to_string(), output::format_size),
            output::date_part(attachment.created_at.as_deref()),
            output::or_dash(attachment.host.as_deref()).to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn get(client: &Client, gid: &str, mode: OutputMode) -> anyhow::Result<()> {
    let attachment = client.get_attachment(gid)?;

    if mode == OutputMode::Json {
        output::print_json(&attachment)?;
        return Ok(());
    }

    print_attachment(&attachment);
    Ok(())
}

fn print_attachment(attachment: &Attachment) {
    println!("Name: {}", attachment.name);
    println!("GID: {}", attachment.gid);

    if let Some(kind) = &attachment.resource_subtype {
        println!("Type: {kind}");
    }
    if let Some(host) = &attachment.host {
        println!("Host: {host}");
    }
    if let Some(size) = attachment.size.filter(|s| *s > 0) {
        println!("Size: {}", output::format_size(size));
    }
    if let Some(created) = &attachment.created_at {
        println!("Created: {created}");
    }
    if let Some(parent) = &attachment.parent {
        println!("Parent: {} ({})", parent.name, parent.gid);
    }
    if let Some(url) = &attachment.download_url {
        println!("Download URL: {url}");
    }
    if let Some(url) = &attachment.permanent_url {
        println!("Permanent URL: {url}");
    }
    if let Some(url) = &attachment.view_url {
        println!("View URL: {url}");
    }
}

fn upload(client: &Client, task_gid: &str, file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let attachment = client.upload_attachment(task_gid, file)?;

    if mode == OutputMode::Json {
        output::print_json(&attachment)?;
        return Ok(());
    }

    println!("File uploaded successfully!");
    println!("GID: {}", attachment.gid);
    println!("Name: {}", attachment.name);
    Ok(())
}

fn download(
    client: &Client,
    gid: &str,
    target: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let attachment = client.get_attachment(gid)?;
    let destination = match target {
        Some(path) => path,
        None => default_destination(&attachment)?,
    };

    let bytes = client.download_attachment(&attachment, &destination)?;

    if mode == OutputMode::Json {
        output::print_json(&serde_json::json!({
            "success": true,
            "gid": attachment.gid,
            "path": destination,
            "bytes": bytes,
        }))?;
    } else {
        println!("Downloaded: {}", destination.display());
    }
    Ok(())
}

/// `./<file name>`, using only the last component of the remote name
fn default_destination(attachment: &Attachment) -> anyhow::Result<PathBuf> {
    attachment
        .local_file_name()
        .map(|name| Path::new(".").join(name))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "attachment name {:?} is not a usable file name; pass --output to choose a destination",
                attachment.name
            )
        })
}

fn delete(client: &Client, gid: &str, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if !force && !confirm(&format!("Are you sure you want to delete attachment {gid}?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete_attachment(gid)?;

    if mode == OutputMode::Json {
        output::print_json(&serde_json::json!({ "success": true, "gid": gid, "deleted": true }))?;
    } else {
        println!("Attachment {gid} deleted.");
    }
    Ok(())
}
