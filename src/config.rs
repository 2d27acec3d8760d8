//! Configuration loading
//!
//! The bearer token and workspace come from the process environment or from a
//! dotenv file. Environment variables always take precedence over file values.
//! Files are parsed into a map; the process environment is never modified.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::paths;

/// Personal access token variable
pub const TOKEN_VAR: &str = "ASANA_TOKEN";

/// Workspace GID variable
pub const WORKSPACE_VAR: &str = "ASANA_WORKSPACE";

/// Optional API base URL override
pub const API_URL_VAR: &str = "ASANA_API_URL";

/// Asana REST API base URL
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file could not be read or parsed
    #[error("failed to load config file {}: {source}", .path.display())]
    File {
        /// The file that failed to load
        path: PathBuf,
        /// Underlying dotenv error
        #[source]
        source: dotenvy::Error,
    },

    /// A required variable was found in neither the environment nor the file
    #[error("{name} not set.\n\n{}", config_help())]
    Missing {
        /// Name of the missing variable
        name: &'static str,
    },
}

/// Settings needed to construct an API client
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Personal access token sent as a bearer token
    pub token: String,
    /// Workspace GID used by workspace-scoped endpoints
    pub workspace: String,
    /// API base URL without a trailing slash
    pub base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("workspace", &self.workspace)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the environment and an optional dotenv file.
    ///
    /// With `explicit` set, only that file is read and it must load. Otherwise
    /// the locations from [`paths::config_locations`] are tried in order and the
    /// first existing file is used; a broken default file is skipped with a
    /// warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) => read_env_file(path)?,
            None => load_default_file(),
        };

        Self::resolve(|key| env::var(key).ok(), &file)
    }

    /// Build a config from a variable lookup and dotenv file values.
    ///
    /// `lookup` wins over `file`; empty values count as unset.
    pub fn resolve<F>(lookup: F, file: &HashMap<String, String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .or_else(|| file.get(key).filter(|value| !value.is_empty()).cloned())
        };

        let token = get(TOKEN_VAR).ok_or(ConfigError::Missing { name: TOKEN_VAR })?;
        let workspace = get(WORKSPACE_VAR).ok_or(ConfigError::Missing {
            name: WORKSPACE_VAR,
        })?;
        let base_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            token,
            workspace,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn load_default_file() -> HashMap<String, String> {
    let Some(path) = paths::config_locations().into_iter().find(|p| p.is_file()) else {
        return HashMap::new();
    };

    debug!("loading config from {}", path.display());
    read_env_file(&path).unwrap_or_else(|err| {
        warn!("{err}");
        HashMap::new()
    })
}

/// Parse a dotenv file into key/value pairs
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    dotenvy::from_path_iter(path)
        .and_then(Iterator::collect)
        .map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })
}

/// Describe where configuration can come from
#[must_use]
pub fn config_help() -> String {
    let mut help = String::from("Configuration can be provided via:\n");
    help.push_str("  1. Environment variables (ASANA_TOKEN, ASANA_WORKSPACE)\n");
    help.push_str("  2. A .env file in one of these locations:\n");
    for location in paths::config_locations() {
        let _ = writeln!(help, "     - {}", location.display());
    }
    help.push_str("  3. A custom config file via --config flag\n");
    help.push_str("\nExample .env file:\n");
    help.push_str("  ASANA_TOKEN=your_personal_access_token\n");
    help.push_str("  ASANA_WORKSPACE=your_workspace_gid\n");
    help.push_str("\nGet your token at: https://app.asana.com/0/my-apps");
    help
}
