//! Users command

use asana::api::Client;
use asana::output::{self, OutputMode, Table};

use crate::cli::UserAction;

/// Handle user subcommands
pub fn user_cmd(client: &Client, action: UserAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        UserAction::List => list(client, mode),
        UserAction::Me => me(client, mode),
    }
}

fn list(client: &Client, mode: OutputMode) -> anyhow::Result<()> {
    let users = client.list_users()?;

    if mode == OutputMode::Json {
        output::print_json(&users)?;
        return Ok(());
    }

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    let mut table = Table::new(["GID", "NAME", "EMAIL"]);
    for user in &users {
        table.row([
            user.gid.as_str(),
            user.name.as_str(),
            output::or_dash(user.email.as_deref()),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn me(client: &Client, mode: OutputMode) -> anyhow::Result<()> {
    let user = client.me()?;

    if mode == OutputMode::Json {
        output::print_json(&user)?;
        return Ok(());
    }

    println!("Name: {}", user.name);
    println!("GID: {}", user.gid);
    if let Some(email) = &user.email {
        println!("Email: {email}");
    }
    Ok(())
}
