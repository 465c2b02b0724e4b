//! Category management.
//!
//! The backend is the sole enforcer of the "no deleting a category
//! with children" rule; this page only translates the resulting 409
//! into the fixed warning the confirmation dialog shows, and leaves
//! the local list untouched when a mutation fails.

use obelisk_catalog::CategoryCache;
use obelisk_client::{AdminApi, ApiError};
use obelisk_core::category::{Category, CategoryInput};

use crate::state::PageState;

/// Fixed warning shown when deleting a category that still has
/// subcategories.
pub const CATEGORY_HAS_CHILDREN_WARNING: &str =
    "Нельзя удалить категорию: сначала удалите или перенесите её подкатегории";

pub struct CategoryAdminPage {
    pub state: PageState<Vec<Category>>,
}

impl CategoryAdminPage {
    /// Load the admin category list.
    pub async fn load(admin: &AdminApi) -> Self {
        Self {
            state: PageState::from_result(admin.categories().await),
        }
    }

    /// Create a category, invalidate the shared cache, and reload.
    pub async fn create(
        &mut self,
        admin: &AdminApi,
        cache: &CategoryCache,
        input: &CategoryInput,
    ) -> Result<(), String> {
        admin
            .create_category(input)
            .await
            .map_err(|e| e.to_string())?;
        cache.invalidate().await;
        self.state = PageState::from_result(admin.categories().await);
        Ok(())
    }

    /// Update a category, invalidate the shared cache, and reload.
    pub async fn update(
        &mut self,
        admin: &AdminApi,
        cache: &CategoryCache,
        id: &str,
        input: &CategoryInput,
    ) -> Result<(), String> {
        admin
            .update_category(id, input)
            .await
            .map_err(|e| e.to_string())?;
        cache.invalidate().await;
        self.state = PageState::from_result(admin.categories().await);
        Ok(())
    }

    /// Delete a category. On the children conflict the list is left
    /// exactly as it was and the fixed warning comes back for the
    /// dialog.
    pub async fn delete(
        &mut self,
        admin: &AdminApi,
        cache: &CategoryCache,
        id: &str,
    ) -> Result<(), String> {
        admin
            .delete_category(id)
            .await
            .map_err(delete_error_message)?;
        cache.invalidate().await;
        self.state = PageState::from_result(admin.categories().await);
        Ok(())
    }
}

/// Map a failed deletion to its dialog message.
fn delete_error_message(err: ApiError) -> String {
    if err.is_conflict() {
        CATEGORY_HAS_CHILDREN_WARNING.to_string()
    } else {
        err.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
