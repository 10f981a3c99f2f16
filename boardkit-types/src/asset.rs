//! Uploaded assets (files) attached to items.

use crate::AssetId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub id: Option<AssetId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default, rename = "url_thumbnail")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
