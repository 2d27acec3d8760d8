//! Search query construction
//!
//! Maps task filters onto the query parameters of the workspace task search
//! endpoint. All date math is relative to a `today` argument so callers (and
//! tests) control the clock.

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{Days, Local, Months, NaiveDate};

/// Query parameters in the order they are sent
pub type Params = Vec<(&'static str, String)>;

/// Result cap used when the caller does not set one
pub const DEFAULT_LIMIT: usize = 100;

/// Fields requested when listing tasks
pub const LIST_FIELDS: &str = "gid,name,completed,due_on,assignee,assignee.name,projects,projects.name,tags,tags.name,permalink_url";

/// Fields requested by free-text search
pub const SEARCH_FIELDS: &str =
    "gid,name,completed,due_on,assignee,assignee.name,projects,projects.name,permalink_url";

/// Fields requested for the summary
pub const SUMMARY_FIELDS: &str = "gid,completed,due_on,assignee,assignee.name";

/// Due date filter
///
/// Parsing never fails: anything that is not a keyword is kept as a literal
/// date and forwarded as-is, so a malformed date is rejected by the API rather
/// than locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueFilter {
    /// Due today
    Today,
    /// Due tomorrow
    Tomorrow,
    /// Due within the next seven days
    Week,
    /// Due before today
    Overdue,
    /// Due on a literal date (expected `YYYY-MM-DD`)
    On(String),
}

impl FromStr for DueFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "today" => Self::Today,
            "tomorrow" => Self::Tomorrow,
            "week" => Self::Week,
            "overdue" => Self::Overdue,
            other => Self::On(other.to_string()),
        })
    }
}

impl DueFilter {
    /// Date bounds for this filter relative to `today`
    #[must_use]
    pub fn params(&self, today: NaiveDate) -> Params {
        match self {
            Self::Today => vec![("due_on", format_date(today))],
            Self::Tomorrow => vec![("due_on", format_date(add_days(today, 1)))],
            Self::Week => vec![
                ("due_on.before", format_date(add_days(today, 7))),
                ("due_on.after", format_date(today)),
            ],
            Self::Overdue => vec![("due_on.before", format_date(today))],
            Self::On(date) => vec![("due_on", date.clone())],
        }
    }
}

/// Filters for listing tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListOptions {
    /// Project GID
    pub project: Option<String>,
    /// Assignee GID or `me`
    pub assignee: Option<String>,
    /// Tag GID
    pub tag: Option<String>,
    /// Due date filter
    pub due: Option<DueFilter>,
    /// Include completed tasks
    pub include_completed: bool,
    /// Maximum results (0 means [`DEFAULT_LIMIT`])
    pub limit: usize,
    /// Sort field: `due_date`, `created_at`, `modified_at`, ...
    pub sort_by: Option<String>,
}

/// Build the search parameters for a task listing
#[must_use]
pub fn task_list_params(options: &TaskListOptions, today: NaiveDate) -> Params {
    let mut params = Params::new();

    if let Some(project) = &options.project {
        params.push(("projects.any", project.clone()));
    }
    if let Some(assignee) = &options.assignee {
        params.push(("assignee.any", assignee.clone()));
    }
    if let Some(tag) = &options.tag {
        params.push(("tags.any", tag.clone()));
    }
    if let Some(due) = &options.due {
        params.extend(due.params(today));
    }

    if !options.include_completed {
        params.push(("completed", "false".to_string()));
    }

    params.push(("limit", effective_limit(options.limit).to_string()));

    if let Some(sort_by) = &options.sort_by {
        params.push(("sort_by", sort_by.clone()));
        params.push(("sort_ascending", "true".to_string()));
    }

    // Subtasks are never listed
    params.push(("is_subtask", "false".to_string()));
    params.push(("opt_fields", LIST_FIELDS.to_string()));
    params
}

/// Build the parameters for a free-text search over open tasks
#[must_use]
pub fn search_params(text: &str, limit: usize) -> Params {
    let mut params = Params::new();
    if !text.is_empty() {
        params.push(("text", text.to_string()));
    }
    params.push(("completed", "false".to_string()));
    params.push(("limit", effective_limit(limit).to_string()));
    params.push(("opt_fields", SEARCH_FIELDS.to_string()));
    params
}

/// Build the parameters for the summary query.
///
/// The search endpoint needs at least one predicate, so without a project the
/// query falls back to tasks modified within the last year.
#[must_use]
pub fn summary_params(project: Option<&str>, today: NaiveDate) -> Params {
    let predicate = project.map_or_else(
        || {
            let since = today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN);
            ("modified_on.after", format_date(since))
        },
        |project| ("projects.any", project.to_string()),
    );

    vec![
        predicate,
        ("limit", DEFAULT_LIMIT.to_string()),
        ("opt_fields", SUMMARY_FIELDS.to_string()),
    ]
}

/// Cap actually sent for a requested limit
#[must_use]
pub const fn effective_limit(limit: usize) -> usize {
    if limit == 0 { DEFAULT_LIMIT } else { limit }
}

/// Current local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
