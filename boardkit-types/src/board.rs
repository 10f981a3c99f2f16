//! Boards and their paged item collections.

use crate::{BoardId, BoardKind, Item, Permission, State};
use serde::{Deserialize, Serialize};

/// One page of items, with the cursor for the next page.
///
/// Cursor mechanics belong to the transport layer; this type only
/// carries the shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsPage {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A board: the platform's container of grouped, columned items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<State>,
    #[serde(default)]
    pub board_kind: Option<BoardKind>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Option<Permission>,
    #[serde(default, deserialize_with = "crate::ids::opt_u64_or_string")]
    pub workspace_id: Option<u64>,
    #[serde(default, deserialize_with = "crate::ids::opt_u64_or_string")]
    pub board_folder_id: Option<u64>,
    #[serde(default)]
    pub item_terminology: Option<String>,
    #[serde(default)]
    pub items_count: i64,
    #[serde(default)]
    pub items_page: Option<ItemsPage>,
}
