//! Product, service, work and menu management.
//!
//! These four surfaces share one mutation pattern with no extra state
//! beyond the lists themselves, so a single wrapper translates client
//! errors into form messages for all of them.

use obelisk_client::{AdminApi, ApiResult};
use obelisk_core::menu::{MenuItem, MenuItemInput};
use obelisk_core::product::{Product, ProductInput};
use obelisk_core::service::{Service, ServiceInput};
use obelisk_core::work::{Work, WorkInput};

use crate::state::PageState;

pub struct ContentAdmin<'a> {
    admin: &'a AdminApi,
}

impl<'a> ContentAdmin<'a> {
    pub fn new(admin: &'a AdminApi) -> Self {
        Self { admin }
    }

    /// Admin product list (includes everything, published or not).
    pub async fn products(&self) -> PageState<Vec<Product>> {
        PageState::from_result(self.admin.products().await)
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, String> {
        to_form_result(self.admin.create_product(input).await)
    }

    pub async fn update_product(&self, id: &str, input: &ProductInput) -> Result<Product, String> {
        to_form_result(self.admin.update_product(id, input).await)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), String> {
        to_form_result(self.admin.delete_product(id).await)
    }

    pub async fn create_service(&self, input: &ServiceInput) -> Result<Service, String> {
        to_form_result(self.admin.create_service(input).await)
    }

    pub async fn update_service(&self, id: &str, input: &ServiceInput) -> Result<Service, String> {
        to_form_result(self.admin.update_service(id, input).await)
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), String> {
        to_form_result(self.admin.delete_service(id).await)
    }

    pub async fn create_work(&self, input: &WorkInput) -> Result<Work, String> {
        to_form_result(self.admin.create_work(input).await)
    }

    pub async fn update_work(&self, id: &str, input: &WorkInput) -> Result<Work, String> {
        to_form_result(self.admin.update_work(id, input).await)
    }

    pub async fn delete_work(&self, id: &str) -> Result<(), String> {
        to_form_result(self.admin.delete_work(id).await)
    }

    pub async fn create_menu_item(&self, input: &MenuItemInput) -> Result<MenuItem, String> {
        to_form_result(self.admin.create_menu_item(input).await)
    }

    pub async fn update_menu_item(&self, id: &str, input: &MenuItemInput) -> Result<MenuItem, String> {
        to_form_result(self.admin.update_menu_item(id, input).await)
    }

    pub async fn delete_menu_item(&self, id: &str) -> Result<(), String> {
        to_form_result(self.admin.delete_menu_item(id).await)
    }
}

/// Convert a client result into the string the form banner shows.
fn to_form_result<T>(result: ApiResult<T>) -> Result<T, String> {
    result.map_err(|e| {
        tracing::warn!(error = %e, "Admin mutation failed");
        e.to_string()
    })
}
