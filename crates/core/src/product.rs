//! Product entity and the sale-eligibility predicate.
//!
//! The sale predicate is deliberately defined in exactly one place.
//! Both the product-card badge and the dedicated sale listing must use
//! [`Product::sale_is_active`]; duplicating the check invites the two
//! surfaces drifting apart.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Price value meaning "price on request". Products carrying it are
/// ordered after all priced products under either sort direction.
pub const PRICE_ON_REQUEST: f64 = 0.0;

/// A catalog product as served by the backend.
///
/// `category` is the legacy single-identifier field; `categories` is the
/// newer ordered list. Both may be present on the same product and the
/// first entry of `categories` wins for labeling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in rubles; `0.0` is the "price on request" sentinel.
    #[serde(default)]
    pub price: f64,
    /// Legacy single category identifier.
    #[serde(default)]
    pub category: Option<EntityId>,
    /// Ordered category identifiers (first entry is primary).
    #[serde(default)]
    pub categories: Option<Vec<EntityId>>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Ordered image URLs; the first is the card image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub sale_percentage: Option<f64>,
    #[serde(default)]
    pub sale_end_date: Option<Timestamp>,
}

impl Product {
    /// Whether the product has a real price (not "price on request").
    pub fn has_price(&self) -> bool {
        self.price > PRICE_ON_REQUEST
    }

    /// Primary category identifier: first entry of `categories`, falling
    /// back to the legacy `category` field.
    pub fn primary_category(&self) -> Option<&EntityId> {
        self.categories
            .as_ref()
            .and_then(|ids| ids.first())
            .or(self.category.as_ref())
    }

    /// The single sale-eligibility predicate.
    ///
    /// True iff the sale flag is set, a positive sale price exists, and
    /// the sale window has not closed (`sale_end_date` absent means the
    /// sale is open-ended). `now` is injected so callers and tests agree
    /// on the clock.
    pub fn sale_is_active(&self, now: Timestamp) -> bool {
        if !self.is_on_sale {
            return false;
        }
        let Some(sale_price) = self.sale_price else {
            return false;
        };
        if sale_price <= 0.0 {
            return false;
        }
        match self.sale_end_date {
            Some(end) => end >= now,
            None => true,
        }
    }

    /// Price to display: the sale price while a sale is active,
    /// otherwise the regular price.
    pub fn effective_price(&self, now: Timestamp) -> f64 {
        if self.sale_is_active(now) {
            // sale_is_active guarantees sale_price is Some and positive
            self.sale_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }
}

/// Payload for creating or updating a product (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<EntityId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub images: Vec<String>,
    pub is_on_sale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_end_date: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
