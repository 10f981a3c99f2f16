//! Fetched items and their raw column data.

use crate::{Asset, ColumnKind, Group, ItemId, State, Update};
use serde::{Deserialize, Serialize};

/// One column's raw reading on one fetched item.
///
/// This is the wire-level `{id, text, type}` triple; the typed form is
/// produced by the `boardkit-columns` parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReading {
    /// External column id, stable per column on a board.
    pub id: String,
    /// Raw display text; absent or empty for unset columns.
    #[serde(default)]
    pub text: Option<String>,
    /// The column's type tag.
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl ColumnReading {
    /// Creates a reading from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            kind,
        }
    }

    /// Creates a reading with no text (an unset column).
    #[must_use]
    pub fn empty(id: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id: id.into(),
            text: None,
            kind,
        }
    }
}

/// A fetched item: one row on a board, with its raw column data and
/// any requested composite collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: Option<State>,
    #[serde(default)]
    pub group: Option<Group>,
    #[serde(default)]
    pub column_values: Vec<ColumnReading>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub updates: Vec<Update>,
}
