//! Category entity.
//!
//! Categories form a two-level hierarchy (parent/child). The backend
//! refuses to delete a category that still has children; the client
//! surfaces that refusal, it never enforces it locally.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    /// URL-safe token used in storefront routes.
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    /// Populated only by the hierarchical endpoint.
    #[serde(default)]
    pub children: Option<Vec<Category>>,
}

impl Category {
    /// A top-level category has no parent.
    pub fn is_parent(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Number of direct children (hierarchical payloads only).
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }
}

/// Payload for creating or updating a category (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
