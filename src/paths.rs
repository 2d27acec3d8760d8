//! Centralized path definitions for asana-cli
//!
//! Configuration is read from dotenv-style files. They are searched in order
//! and the first one that exists wins:
//!
//! ```text
//! ./.env                          # Current directory
//! ~/.config/asana-cli/.env        # User-level config
//! ```

use std::path::PathBuf;

/// Dotenv filename used in every search location
pub const ENV_FILE: &str = ".env";

/// Application directory under `~/.config`
const APP_DIR: &str = "asana-cli";

/// Get the user-level config directory.
///
/// Returns `~/.config/asana-cli/`, or `None` when the home directory is unknown.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(APP_DIR))
}

/// Get the dotenv locations checked when no `--config` file is given,
/// in priority order.
#[must_use]
pub fn config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(ENV_FILE)];
    if let Some(dir) = user_config_dir() {
        locations.push(dir.join(ENV_FILE));
    }
    locations
}
