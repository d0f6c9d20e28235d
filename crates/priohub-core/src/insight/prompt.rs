//! Prompt construction for the generative-text service.
//!
//! Prompts are plain strings built from already-normalized data; keeping them
//! pure makes the wording testable without any network.

use crate::insight::ProjectSnapshot;
use crate::task::Task;

/// Prompt asking for a short actionable insight on one task.
pub fn analyze_task_prompt(task: &Task) -> String {
    let description = if task.description.is_empty() {
        "No description"
    } else {
        task.description.as_str()
    };
    let deadline = task.deadline.as_deref().unwrap_or("No deadline");
    let labels = if task.labels.is_empty() {
        "none".to_string()
    } else {
        task.labels.join(", ")
    };

    format!(
        "Analyze this project task and provide a brief, actionable insight \
         (2-3 sentences max):\n\
         \n\
         Task: {title}\n\
         Description: {description}\n\
         Status: {status}\n\
         Due: {deadline}\n\
         Labels: {labels}\n\
         \n\
         Provide:\n\
         1. Risk assessment (low/medium/high)\n\
         2. Why this matters\n\
         3. One actionable suggestion\n\
         \n\
         Keep it brief and professional.",
        title = task.title,
        status = task.status,
    )
}

/// Prompt asking for a project-level risk call from aggregate counts.
pub fn project_risk_prompt(snapshot: &ProjectSnapshot) -> String {
    format!(
        "Analyze project health and predict risks:\n\
         \n\
         Total Tasks: {total}\n\
         Completed: {completed} ({percent}%)\n\
         In Progress: {in_progress}\n\
         Overdue: {overdue}\n\
         \n\
         Recent task titles: {titles}\n\
         \n\
         Provide (2-3 sentences):\n\
         1. Risk level: LOW/MEDIUM/HIGH\n\
         2. Key concern\n\
         3. Recommended action\n\
         \n\
         Be direct and concise.",
        total = snapshot.total,
        completed = snapshot.completed,
        percent = snapshot.completion_percent(),
        in_progress = snapshot.in_progress,
        overdue = snapshot.overdue,
        titles = snapshot.recent_titles.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_prompt_includes_fields_and_fallbacks() {
        let task = Task {
            status: "To Do".to_string(),
            ..Task::new("t1", "Fix importer")
        };

        let prompt = analyze_task_prompt(&task);
        assert!(prompt.contains("Task: Fix importer"));
        assert!(prompt.contains("Description: No description"));
        assert!(prompt.contains("Due: No deadline"));
        assert!(prompt.contains("Labels: none"));
    }

    #[test]
    fn task_prompt_joins_labels() {
        let task = Task {
            labels: vec!["critical".to_string(), "backend".to_string()],
            deadline: Some("2026-08-09T17:00:00Z".to_string()),
            ..Task::new("t1", "Fix importer")
        };

        let prompt = analyze_task_prompt(&task);
        assert!(prompt.contains("Labels: critical, backend"));
        assert!(prompt.contains("Due: 2026-08-09T17:00:00Z"));
    }

    #[test]
    fn risk_prompt_reports_aggregates() {
        let snapshot = ProjectSnapshot {
            total: 4,
            completed: 1,
            in_progress: 2,
            overdue: 1,
            recent_titles: vec!["Ship hotfix".to_string(), "Tidy docs".to_string()],
        };

        let prompt = project_risk_prompt(&snapshot);
        assert!(prompt.contains("Total Tasks: 4"));
        assert!(prompt.contains("Completed: 1 (25%)"));
        assert!(prompt.contains("Overdue: 1"));
        assert!(prompt.contains("Ship hotfix, Tidy docs"));
    }
}
