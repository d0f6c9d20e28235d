//! Aggregate project state fed into the risk prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, DONE_STATUS};

/// How many task titles the risk prompt samples.
const RECENT_TITLE_COUNT: usize = 5;
/// Sampled titles are cut to this many characters.
const TITLE_PREVIEW_CHARS: usize = 30;

/// Point-in-time aggregate over a task set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Tasks whose deadline parses and lies before `now`. A deadline that
    /// fails to parse does not count as overdue.
    pub overdue: usize,
    /// Up to five titles, each truncated for prompt brevity.
    pub recent_titles: Vec<String>,
}

impl ProjectSnapshot {
    /// Aggregate a task set against the given point in time.
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let completed = tasks.iter().filter(|t| t.status == DONE_STATUS).count();
        let in_progress = tasks.iter().filter(|t| t.status == "In Progress").count();
        let overdue = tasks
            .iter()
            .filter(|t| {
                t.deadline
                    .as_deref()
                    .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                    .map(|due| due.with_timezone(&Utc) < now)
                    .unwrap_or(false)
            })
            .count();

        let recent_titles = tasks
            .iter()
            .take(RECENT_TITLE_COUNT)
            .map(|t| t.title.chars().take(TITLE_PREVIEW_CHARS).collect())
            .collect();

        ProjectSnapshot {
            total: tasks.len(),
            completed,
            in_progress,
            overdue,
            recent_titles,
        }
    }

    /// Rounded completion percentage; 0 for an empty set.
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn task(id: &str, status: &str, deadline: Option<&str>) -> Task {
        Task {
            status: status.to_string(),
            deadline: deadline.map(str::to_string),
            ..Task::new(id, format!("Task {id}"))
        }
    }

    #[test]
    fn counts_statuses_and_overdue() {
        let tasks = vec![
            task("1", "Done", None),
            task("2", "In Progress", Some("2026-07-28T00:00:00Z")),
            task("3", "To Do", Some("2026-09-01T00:00:00Z")),
            task("4", "To Do", Some("not a date")),
        ];

        let snapshot = ProjectSnapshot::from_tasks(&tasks, fixed_now());
        assert_eq!(snapshot.total, 4);
        assert_eq!(snapshot.completed, 1);
        assert_eq!(snapshot.in_progress, 1);
        assert_eq!(snapshot.overdue, 1);
        assert_eq!(snapshot.completion_percent(), 25);
    }

    #[test]
    fn empty_set_is_all_zeroes() {
        let snapshot = ProjectSnapshot::from_tasks(&[], fixed_now());
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.completion_percent(), 0);
        assert!(snapshot.recent_titles.is_empty());
    }

    #[test]
    fn samples_and_truncates_titles() {
        let mut tasks: Vec<Task> = (0..8)
            .map(|i| task(&format!("{i}"), "To Do", None))
            .collect();
        tasks[0].title = "An extremely long task title that keeps going".to_string();

        let snapshot = ProjectSnapshot::from_tasks(&tasks, fixed_now());
        assert_eq!(snapshot.recent_titles.len(), 5);
        assert_eq!(snapshot.recent_titles[0].chars().count(), 30);
    }
}
