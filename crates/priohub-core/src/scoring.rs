//! Priority scoring engine.
//!
//! Computes a deterministic 0-100 priority score per task from five weighted
//! factors:
//!
//! ```text
//! score = 0.30*urgency + 0.20*strategic + 0.25*dependency
//!       + 0.15*capacity + 0.10*risk
//! ```
//!
//! Every factor is a total function over an already-normalized task: a missing
//! or malformed deadline maps to a fixed urgency value instead of an error, so
//! there is no unscoreable task. The final score is clamped to [0, 100] even
//! though the weighted sum cannot leave that range, then rounded to one
//! decimal, ties rounding away from zero.
//!
//! Keyword classification is an ordered rule table: label checks are
//! exact-string membership in the case the board supplied, title and
//! description checks are case-insensitive substring matches. First matching
//! rule wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

// Weights as integer percentages; the weighted sum of whole-number sub-scores
// stays exact in binary floating point.
const URGENCY_WEIGHT_PCT: f64 = 30.0;
const STRATEGIC_WEIGHT_PCT: f64 = 20.0;
const DEPENDENCY_WEIGHT_PCT: f64 = 25.0;
const CAPACITY_WEIGHT_PCT: f64 = 15.0;
const RISK_WEIGHT_PCT: f64 = 10.0;

// Strategic alignment rule table, highest precedence first.
const CRITICAL_LABELS: &[&str] = &["critical", "blocker", "emergency"];
const HIGH_LABELS: &[&str] = &["high", "urgent"];
const FIX_TITLE_KEYWORDS: &[&str] = &["bug", "fix", "error"];
const LOW_LABELS: &[&str] = &["low", "nice to have"];

// Dependency impact markers.
const DEPENDENCY_KEYWORDS: &[&str] = &["blocker", "blocks"];
const ACTIVE_STATUSES: &[&str] = &["In Progress", "In Review"];

/// The five independent sub-scores, each within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub urgency: f64,
    pub strategic: f64,
    pub dependency_impact: f64,
    pub team_capacity: f64,
    pub risk: f64,
}

impl ScoreBreakdown {
    /// Weighted total: clamped to [0, 100], rounded to one decimal.
    pub fn weighted_total(&self) -> f64 {
        let sum = (self.urgency * URGENCY_WEIGHT_PCT
            + self.strategic * STRATEGIC_WEIGHT_PCT
            + self.dependency_impact * DEPENDENCY_WEIGHT_PCT
            + self.team_capacity * CAPACITY_WEIGHT_PCT
            + self.risk * RISK_WEIGHT_PCT)
            / 100.0;

        round_to_tenth(sum.clamp(0.0, 100.0))
    }
}

/// Compute all five sub-scores for a task against one `now` snapshot.
pub fn score_breakdown(task: &Task, now: DateTime<Utc>) -> ScoreBreakdown {
    ScoreBreakdown {
        urgency: urgency_score(task.deadline.as_deref(), now),
        strategic: strategic_score(&task.labels, &task.title),
        dependency_impact: dependency_score(&task.description, &task.status),
        team_capacity: capacity_score(task.assignees.len()),
        risk: risk_score(&task.status, &task.title),
    }
}

/// Priority score for one task.
///
/// Pure and deterministic: no I/O, no clock reads; the caller supplies `now`.
/// The full task set is part of the contract; the current factors are derived
/// from the task alone.
pub fn score(task: &Task, _all_tasks: &[Task], now: DateTime<Utc>) -> f64 {
    score_breakdown(task, now).weighted_total()
}

/// Attach a priority score to every task, all against the same `now`.
pub fn score_all(tasks: &mut [Task], now: DateTime<Utc>) {
    for task in tasks.iter_mut() {
        task.priority_score = Some(score_breakdown(task, now).weighted_total());
    }
}

/// Deadline proximity. No deadline reads as backlog (10); a deadline that
/// fails to parse is an explicit fallback (30), not a failure. The offset in
/// the deadline value itself is honored.
fn urgency_score(deadline: Option<&str>, now: DateTime<Utc>) -> f64 {
    let Some(raw) = deadline else {
        return 10.0;
    };
    let Ok(due) = DateTime::parse_from_rfc3339(raw) else {
        return 30.0;
    };

    let remaining = due.with_timezone(&Utc) - now;
    let hours = remaining.num_seconds() as f64 / 3600.0;
    let days = remaining.num_days();

    if hours < 0.0 {
        100.0
    } else if hours < 24.0 {
        90.0
    } else if days == 1 {
        80.0
    } else if days <= 3 {
        60.0
    } else if days <= 7 {
        40.0
    } else {
        20.0
    }
}

fn strategic_score(labels: &[String], title: &str) -> f64 {
    let title_lower = title.to_lowercase();

    if has_any_label(labels, CRITICAL_LABELS) {
        90.0
    } else if has_any_label(labels, HIGH_LABELS) {
        70.0
    } else if contains_any(&title_lower, FIX_TITLE_KEYWORDS) {
        75.0
    } else if has_any_label(labels, LOW_LABELS) {
        25.0
    } else {
        50.0
    }
}

fn dependency_score(description: &str, status: &str) -> f64 {
    let description_lower = description.to_lowercase();

    if contains_any(&description_lower, DEPENDENCY_KEYWORDS) {
        85.0
    } else if ACTIVE_STATUSES.contains(&status) {
        60.0
    } else {
        30.0
    }
}

/// Non-monotonic: unassigned work ranks medium, single ownership highest,
/// over-staffed work lowest.
fn capacity_score(assignee_count: usize) -> f64 {
    match assignee_count {
        0 => 60.0,
        1 => 70.0,
        2 => 50.0,
        _ => 30.0,
    }
}

fn risk_score(status: &str, title: &str) -> f64 {
    let title_lower = title.to_lowercase();

    if status == "In Progress" {
        40.0
    } else if status == "In Review" {
        50.0
    } else if title_lower.contains("bug") {
        70.0
    } else if title_lower.contains("deploy") || title_lower.contains("production") {
        75.0
    } else {
        30.0
    }
}

fn has_any_label(labels: &[String], candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|candidate| labels.iter().any(|label| label == candidate))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
