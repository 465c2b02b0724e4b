//! Site navigation menu entries, managed from the admin panel.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: EntityId,
    pub title: String,
    /// Storefront route, e.g. `/catalog`.
    pub path: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Payload for creating or updating a menu entry (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    pub title: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    pub is_visible: bool,
}
