//! Canonical task types.
//!
//! A [`Task`] is the normalized form of one board card. Tasks are transient:
//! built fresh for every request, scored at most once, and discarded when the
//! response is written. Nothing persists them.

mod normalize;

pub use normalize::normalize;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status assigned when a card's list id has no entry in the list lookup.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Status name of the board column holding finished work.
pub const DONE_STATUS: &str = "Done";

/// Canonical work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier from the source system.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Free text, may be empty.
    #[serde(default)]
    pub description: String,
    /// Resolved list/column name, or `"unknown"`.
    pub status: String,
    /// Member identifiers, not resolved to names.
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Raw ISO-8601 timestamp string, unparsed at normalization time.
    pub deadline: Option<String>,
    /// Link to the source record.
    #[serde(default)]
    pub url: String,
    /// Label display names, order as supplied by the board.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Raw foreign key into the list lookup.
    pub source_list_id: String,
    /// Present only after scoring; always within [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
}

impl Task {
    /// Create a bare task. Mostly useful for tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: UNKNOWN_STATUS.to_string(),
            assignees: Vec::new(),
            deadline: None,
            url: String::new(),
            labels: Vec::new(),
            source_list_id: String::new(),
            priority_score: None,
        }
    }
}

/// Aggregate counts for the summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_tasks: usize,
    /// Rounded percentage of tasks whose status is "Done"; 0 for an empty set.
    pub completion_rate: u32,
    /// Task counts keyed by status name.
    pub by_status: BTreeMap<String, usize>,
}

impl ProjectSummary {
    /// Count tasks by status and derive the completion rate.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
        for task in tasks {
            *by_status.entry(task.status.clone()).or_insert(0) += 1;
        }

        let completion_rate = if tasks.is_empty() {
            0
        } else {
            let done = by_status.get(DONE_STATUS).copied().unwrap_or(0);
            ((done as f64 / tasks.len() as f64) * 100.0).round() as u32
        };

        ProjectSummary {
            total_tasks: tasks.len(),
            completion_rate,
            by_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_status(id: &str, status: &str) -> Task {
        Task {
            status: status.to_string(),
            ..Task::new(id, format!("Task {id}"))
        }
    }

    #[test]
    fn new_task_defaults() {
        let task = Task::new("t1", "Write docs");
        assert_eq!(task.status, UNKNOWN_STATUS);
        assert!(task.priority_score.is_none());
        assert!(task.labels.is_empty());
    }

    #[test]
    fn serialization_omits_unscored_priority() {
        let task = Task::new("t1", "Write docs");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("priority_score").is_none());

        let scored = Task {
            priority_score: Some(43.0),
            ..task
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["priority_score"], 43.0);
    }

    #[test]
    fn summary_counts_by_status() {
        let tasks = vec![
            task_with_status("1", "Done"),
            task_with_status("2", "Done"),
            task_with_status("3", "In Progress"),
            task_with_status("4", "To Do"),
        ];

        let summary = ProjectSummary::from_tasks(&tasks);
        assert_eq!(summary.total_tasks, 4);
        assert_eq!(summary.completion_rate, 50);
        assert_eq!(summary.by_status.get("Done"), Some(&2));
        assert_eq!(summary.by_status.get("In Progress"), Some(&1));
        assert_eq!(summary.by_status.get("To Do"), Some(&1));
    }

    #[test]
    fn summary_of_empty_set() {
        let summary = ProjectSummary::from_tasks(&[]);
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.completion_rate, 0);
        assert!(summary.by_status.is_empty());
    }

    #[test]
    fn summary_rounds_completion_rate() {
        let tasks = vec![
            task_with_status("1", "Done"),
            task_with_status("2", "To Do"),
            task_with_status("3", "To Do"),
        ];
        // 1/3 = 33.33..% rounds to 33.
        assert_eq!(ProjectSummary::from_tasks(&tasks).completion_rate, 33);
    }
}
