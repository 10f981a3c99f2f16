//! String enumerations shared by boards and items.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a board or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Active,
    Archived,
    Deleted,
    All,
}

/// Visibility of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    Public,
    Private,
    Share,
}

/// Who may edit a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Assignee,
    Collaborators,
    Everyone,
    Owners,
}
