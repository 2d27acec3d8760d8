//! Configure command - explain where credentials come from

use asana::config;

/// Print configuration help
pub fn configure() {
    println!("Asana CLI Configuration");
    println!("=======================");
    println!();
    println!("{}", config::config_help());
    println!();
    println!("Finding your Workspace GID:");
    println!("  Run 'asana users me --json' after setting ASANA_TOKEN to check your access,");
    println!("  or find it in your Asana URL: https://app.asana.com/0/<workspace_gid>/...");
}
