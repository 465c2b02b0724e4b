//! Shared category cache.
//!
//! Every page used to fetch the category list independently on mount;
//! this cache replaces those per-page copies with one lazily populated,
//! read-through table keyed by category id. Admin mutations call
//! [`CategoryCache::invalidate`] so the next read refetches.

use std::collections::HashMap;

use obelisk_client::{ApiResult, StorefrontApi};
use obelisk_core::category::Category;
use obelisk_core::types::EntityId;
use tokio::sync::RwLock;

pub struct CategoryCache {
    api: StorefrontApi,
    entries: RwLock<Option<HashMap<EntityId, Category>>>,
}

impl CategoryCache {
    pub fn new(api: StorefrontApi) -> Self {
        Self {
            api,
            entries: RwLock::new(None),
        }
    }

    /// The full category table, fetching it on first use.
    ///
    /// Concurrent first readers may race to populate; the write lock
    /// makes the second fetch overwrite with an equally fresh copy.
    pub async fn all(&self) -> ApiResult<HashMap<EntityId, Category>> {
        if let Some(entries) = self.entries.read().await.as_ref() {
            return Ok(entries.clone());
        }

        let fetched = self.api.categories().await?;
        let table: HashMap<EntityId, Category> =
            fetched.into_iter().map(|c| (c.id.clone(), c)).collect();

        tracing::debug!(count = table.len(), "Category cache populated");
        *self.entries.write().await = Some(table.clone());
        Ok(table)
    }

    /// Read-through lookup of one category.
    pub async fn get(&self, id: &str) -> ApiResult<Option<Category>> {
        Ok(self.all().await?.get(id).cloned())
    }

    /// Drop the cached table. Called after any admin category mutation.
    pub async fn invalidate(&self) {
        *self.entries.write().await = None;
        tracing::debug!("Category cache invalidated");
    }

    /// Seed the cache from a list fetched elsewhere (e.g. a page that
    /// already holds a fresh copy).
    pub async fn prime(&self, categories: Vec<Category>) {
        let table = categories.into_iter().map(|c| (c.id.clone(), c)).collect();
        *self.entries.write().await = Some(table);
    }

    /// Whether the cache currently holds a table (test and diagnostics
    /// hook; readers should use [`all`](Self::all)).
    pub async fn is_populated(&self) -> bool {
        self.entries.read().await.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use obelisk_client::ApiConfig;

    fn cache() -> CategoryCache {
        let api = StorefrontApi::new(&ApiConfig::default()).expect("client builds");
        CategoryCache::new(api)
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            slug: id.into(),
            parent_id: None,
            description: None,
            sort_order: None,
            children: None,
        }
    }

    #[tokio::test]
    async fn primed_cache_serves_lookups_without_fetching() {
        let cache = cache();
        cache.prime(vec![category("c1", "Памятники")]).await;

        let found = cache.get("c1").await.expect("no fetch needed");
        assert_eq!(found.map(|c| c.name), Some("Памятники".to_string()));
        let missing = cache.get("c2").await.expect("no fetch needed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn invalidate_clears_the_table() {
        let cache = cache();
        cache.prime(vec![category("c1", "Памятники")]).await;
        assert!(cache.is_populated().await);

        cache.invalidate().await;
        assert!(!cache.is_populated().await);
    }
}
