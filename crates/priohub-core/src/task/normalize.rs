//! Card-to-task normalization.

use std::collections::HashMap;

use crate::board::{BoardList, Card};
use crate::task::{Task, UNKNOWN_STATUS};

/// Convert raw board cards into canonical tasks.
///
/// Pure and deterministic: identical inputs always yield the same task
/// sequence, in card order. Status comes from the list lookup and falls back
/// to `"unknown"`; labels keep only their display names; member ids and the
/// deadline string pass through untouched.
pub fn normalize(cards: &[Card], lists: &[BoardList]) -> Vec<Task> {
    let list_names: HashMap<&str, &str> = lists
        .iter()
        .map(|list| (list.id.as_str(), list.name.as_str()))
        .collect();

    cards
        .iter()
        .map(|card| Task {
            id: card.id.clone(),
            title: card.name.clone(),
            description: card.desc.clone(),
            status: list_names
                .get(card.id_list.as_str())
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            assignees: card.id_members.clone(),
            deadline: card.due.clone(),
            url: card.url.clone(),
            labels: card.labels.iter().map(|label| label.name.clone()).collect(),
            source_list_id: card.id_list.clone(),
            priority_score: None,
        })
        .collect()
}
