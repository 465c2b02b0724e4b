//! Dedicated sale listing.
//!
//! Inclusion is decided by the single sale predicate on `Product`; the
//! page never re-implements the check, so the badge and this listing
//! cannot drift apart.

use obelisk_client::StorefrontApi;
use obelisk_core::product::Product;
use obelisk_core::types::Timestamp;

use crate::state::PageState;

pub struct SalePage {
    pub state: PageState<Vec<Product>>,
}

impl SalePage {
    /// Fetch the catalog and keep only products with an active sale.
    pub async fn load(api: &StorefrontApi, now: Timestamp) -> Self {
        let state = PageState::from_result(
            api.products()
                .await
                .map(|products| select_on_sale(products, now)),
        );
        Self { state }
    }
}

/// Filter down to products whose sale window is currently open.
fn select_on_sale(products: Vec<Product>, now: Timestamp) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.sale_is_active(now))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
