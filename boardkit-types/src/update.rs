//! Updates (comments) posted on items.

use crate::UpdateId;
use serde::{Deserialize, Serialize};

/// An update posted on an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub id: Option<UpdateId>,
    #[serde(default)]
    pub text_body: Option<String>,
}
