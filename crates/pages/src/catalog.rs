//! Products listing page.
//!
//! Fetches the product list and the category table concurrently,
//! wraps the products in a [`CatalogView`], and labels cards through
//! the two-tier resolver. A category fetch failure never blocks
//! product rendering; the legacy label table covers the gap.
//!
//! Loads are guarded against staleness: if parameters trigger a new
//! load while an earlier one is still in flight, the earlier response
//! is discarded when it finally arrives.

use std::collections::HashMap;

use obelisk_catalog::{
    resolve_category_label, CatalogView, CategoryCache, CategoryLabel, RequestSequence, Ticket,
};
use obelisk_client::{ApiResult, StorefrontApi};
use obelisk_core::category::Category;
use obelisk_core::product::Product;
use obelisk_core::types::EntityId;

use crate::state::PageState;

pub struct CatalogPage {
    seq: RequestSequence,
    pub state: PageState<CatalogView>,
    pub categories: HashMap<EntityId, Category>,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPage {
    pub fn new() -> Self {
        Self {
            seq: RequestSequence::new(),
            state: PageState::Loading,
            categories: HashMap::new(),
        }
    }

    /// Fetch products and categories and apply them, unless a newer
    /// load superseded this one while it was in flight.
    pub async fn load(&mut self, api: &StorefrontApi, cache: &CategoryCache) {
        let ticket = self.begin_load();
        let (products, categories) = tokio::join!(api.products(), cache.all());
        self.apply(ticket, products, categories);
    }

    /// Mark the page loading and issue the ticket for this fetch.
    fn begin_load(&mut self) -> Ticket {
        self.state = PageState::Loading;
        self.seq.issue()
    }

    /// Apply a completed fetch. Returns false when the response was
    /// stale and discarded.
    fn apply(
        &mut self,
        ticket: Ticket,
        products: ApiResult<Vec<Product>>,
        categories: ApiResult<HashMap<EntityId, Category>>,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!("Discarding stale catalog response");
            return false;
        }

        // Missing categories degrade labels, not the listing.
        self.categories = categories.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Category fetch failed, falling back to legacy labels");
            HashMap::new()
        });
        self.state = PageState::from_result(products.map(CatalogView::new));
        true
    }

    /// Badge label for one product card.
    pub fn card_label(&self, product: &Product) -> CategoryLabel {
        resolve_category_label(product, &self.categories)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Памятник {id}"),
            description: String::new(),
            price: 10_000.0,
            category: Some(category.into()),
            categories: None,
            material: None,
            kind: None,
            color: None,
            images: vec![],
            is_on_sale: false,
            sale_price: None,
            sale_percentage: None,
            sale_end_date: None,
        }
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut page = CatalogPage::new();
        let stale = page.begin_load();
        let fresh = page.begin_load();

        let applied = page.apply(stale, Ok(vec![product("old", "vertical")]), Ok(HashMap::new()));
        assert!(!applied);
        assert!(page.state.is_loading());

        let applied = page.apply(fresh, Ok(vec![product("new", "vertical")]), Ok(HashMap::new()));
        assert!(applied);
        let view = page.state.ready().expect("fresh response applied");
        assert_eq!(view.visible()[0].id, "new");
    }

    #[test]
    fn category_failure_degrades_to_legacy_labels() {
        let mut page = CatalogPage::new();
        let ticket = page.begin_load();
        page.apply(
            ticket,
            Ok(vec![product("p1", "cross")]),
            Err(obelisk_client::ApiError::Status {
                status: 500,
                context: "failed to load categories",
                body: String::new(),
            }),
        );

        assert!(page.state.is_ready());
        let label = page.card_label(&product("p1", "cross"));
        assert_eq!(label.name, "Кресты");
    }

    #[test]
    fn product_failure_becomes_page_error() {
        let mut page = CatalogPage::new();
        let ticket = page.begin_load();
        page.apply(
            ticket,
            Err(obelisk_client::ApiError::Status {
                status: 502,
                context: "failed to load products",
                body: String::new(),
            }),
            Ok(HashMap::new()),
        );
        assert!(page.state.error().is_some());
    }
}
