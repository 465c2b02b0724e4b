//! Service entity (installation, engraving, restoration, ...).
//!
//! Services carry one optional level of sub-services used by the
//! hierarchical listing and the detail drill-down.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Inactive services are hidden from the public listing but still
    /// visible in the admin panel.
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub children: Option<Vec<Service>>,
}

fn default_active() -> bool {
    true
}

impl Service {
    /// Text for the listing card: short description when present,
    /// otherwise the full description.
    pub fn card_text(&self) -> &str {
        self.short_description.as_deref().unwrap_or(&self.description)
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Payload for creating or updating a service (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub images: Vec<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
}
