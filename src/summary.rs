//! Task summary aggregation
//!
//! Counts a single page of tasks by completion state, overdue status, and
//! assignee. The summary reflects only the tasks it is given; it never fetches
//! more pages.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Task;
use crate::query::format_date;

/// Task counts over one result page
///
/// `total == open + completed`, `overdue <= open`, and the assignee buckets
/// plus `unassigned` add up to `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Number of tasks counted
    pub total: usize,
    /// Tasks not yet completed
    pub open: usize,
    /// Completed tasks
    pub completed: usize,
    /// Open tasks whose due date is before today
    pub overdue: usize,
    /// Tasks without an assignee
    pub unassigned: usize,
    /// Task count per assignee display name
    pub by_assignee: BTreeMap<String, usize>,
}

impl TaskSummary {
    /// Aggregate `tasks`, treating anything due before `today` as overdue
    #[must_use]
    pub fn from_tasks(tasks: &[Task], today: NaiveDate) -> Self {
        let today = format_date(today);
        let mut summary = Self::default();
        for task in tasks {
            summary.record(task, &today);
        }
        summary
    }

    /// Count one task. `today` is a `YYYY-MM-DD` string; due dates are
    /// compared to it as strings.
    pub fn record(&mut self, task: &Task, today: &str) {
        self.total += 1;

        if task.completed {
            self.completed += 1;
        } else {
            self.open += 1;
            if task.due_on.as_deref().is_some_and(|due| !due.is_empty() && due < today) {
                self.overdue += 1;
            }
        }

        // Keyed by display name: two users sharing a name share a bucket
        match &task.assignee {
            Some(user) => *self.by_assignee.entry(user.name.clone()).or_insert(0) += 1,
            None => self.unassigned += 1,
        }
    }

    /// Assignees ordered by task count, highest first (ties by name)
    #[must_use]
    pub fn assignees_by_count(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .by_assignee
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }
}
