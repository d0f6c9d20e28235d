//! Raw record shapes returned by the board API.

use serde::{Deserialize, Serialize};

/// A card as the board returns it. Fields the board may omit carry defaults
/// so a sparse card still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub id_list: String,
    #[serde(default)]
    pub id_members: Vec<String>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub labels: Vec<CardLabel>,
}

/// A label attached to a card. Only the display name is consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLabel {
    #[serde(default)]
    pub name: String,
}

/// A list (column) on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}
