//! Ordering and selection over scored task sets.

use chrono::{DateTime, Utc};

use crate::scoring;
use crate::task::Task;

/// Label that flags a task as blocking other work.
const BLOCKER_LABEL: &str = "blocker";
const BLOCKER_DESCRIPTION_KEYWORDS: &[&str] = &["blocker", "blocks"];

/// Stable descending sort by attached priority score.
///
/// Tasks with equal scores keep their relative input order; an unscored task
/// sorts as zero.
pub fn sort_by_priority_descending(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| attached_score(b).total_cmp(&attached_score(a)));
}

/// Select the tasks flagged as blockers, ordered by freshly computed score.
///
/// A task qualifies when a label equals `"blocker"` exactly or its lower-cased
/// description contains "blocker" or "blocks". Scores are recomputed against
/// `now` rather than read from `priority_score`, so the ordering cannot go
/// stale when this is called outside the scoring pipeline.
pub fn select_blockers(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    let mut picked: Vec<(f64, Task)> = tasks
        .iter()
        .filter(|task| is_blocker(task))
        .map(|task| (scoring::score(task, tasks, now), task.clone()))
        .collect();

    picked.sort_by(|a, b| b.0.total_cmp(&a.0));
    picked.into_iter().map(|(_, task)| task).collect()
}

fn is_blocker(task: &Task) -> bool {
    if task.labels.iter().any(|label| label == BLOCKER_LABEL) {
        return true;
    }
    let description = task.description.to_lowercase();
    BLOCKER_DESCRIPTION_KEYWORDS
        .iter()
        .any(|keyword| description.contains(keyword))
}

fn attached_score(task: &Task) -> f64 {
    task.priority_score.unwrap_or(0.0)
}
