//! Product detail page: one product, its category badge, and a
//! gallery cursor over its images.

use obelisk_catalog::{resolve_category_label, CategoryCache, CategoryLabel, GalleryCursor};
use obelisk_client::StorefrontApi;
use obelisk_core::product::Product;

use crate::state::PageState;

pub struct ProductPage {
    pub state: PageState<ProductDetail>,
}

pub struct ProductDetail {
    pub product: Product,
    pub label: CategoryLabel,
    pub gallery: GalleryCursor,
}

impl ProductPage {
    /// Fetch one product and resolve its badge. The category table
    /// comes from the shared cache; its failure only degrades the
    /// badge to the legacy table.
    pub async fn load(api: &StorefrontApi, cache: &CategoryCache, id: &str) -> Self {
        let (product, categories) = tokio::join!(api.product(id), cache.all());

        let state = match product {
            Ok(product) => {
                let categories = categories.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Category fetch failed on product page");
                    Default::default()
                });
                let label = resolve_category_label(&product, &categories);
                let gallery = GalleryCursor::new(product.images.len());
                PageState::Ready(ProductDetail {
                    product,
                    label,
                    gallery,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, product_id = id, "Product fetch failed");
                PageState::Failed(e.to_string())
            }
        };

        Self { state }
    }
}
