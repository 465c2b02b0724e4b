//! Authenticated management endpoints.
//!
//! [`AdminApi`] wraps the same connection pool as [`StorefrontApi`] and
//! attaches the bearer token obtained from `POST /auth/login` to every
//! request. Deleting a category that still has children is rejected by
//! the backend with a 409; that comes back as a status error which
//! [`crate::ApiError::is_conflict`] recognizes.

use obelisk_core::category::{Category, CategoryInput};
use obelisk_core::menu::{MenuItem, MenuItemInput};
use obelisk_core::order::{Order, OrderStatus};
use obelisk_core::product::{Product, ProductInput};
use obelisk_core::service::{Service, ServiceInput};
use obelisk_core::work::{Work, WorkInput};

use crate::error::{check_status, parse_response, ApiResult};
use crate::storefront::StorefrontApi;

/// Fixed error messages per admin endpoint family.
const CTX_ADMIN_PRODUCTS: &str = "failed to manage products";
const CTX_ADMIN_CATEGORIES: &str = "failed to manage categories";
const CTX_ADMIN_SERVICES: &str = "failed to manage services";
const CTX_ADMIN_WORKS: &str = "failed to manage works";
const CTX_ADMIN_MENU: &str = "failed to manage menu";
const CTX_ADMIN_ORDERS: &str = "failed to load orders";

/// HTTP client for the admin API.
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl AdminApi {
    /// Build an admin client on top of an authenticated session.
    pub fn new(storefront: &StorefrontApi, token: String) -> Self {
        Self {
            client: storefront.http().clone(),
            base_url: storefront.base_url().to_string(),
            token,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .put(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
    }

    fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .patch(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
    }

    // ---- products ----

    /// `GET /admin/products` — includes unpublished products.
    pub async fn products(&self) -> ApiResult<Vec<Product>> {
        let response = self.get("/admin/products").send().await?;
        parse_response(response, CTX_ADMIN_PRODUCTS).await
    }

    /// `POST /admin/products`.
    pub async fn create_product(&self, input: &ProductInput) -> ApiResult<Product> {
        let response = self.post("/admin/products").json(input).send().await?;
        tracing::info!(name = %input.name, "Product created");
        parse_response(response, CTX_ADMIN_PRODUCTS).await
    }

    /// `PUT /admin/products/{id}`.
    pub async fn update_product(&self, id: &str, input: &ProductInput) -> ApiResult<Product> {
        let response = self
            .put(&format!("/admin/products/{id}"))
            .json(input)
            .send()
            .await?;
        parse_response(response, CTX_ADMIN_PRODUCTS).await
    }

    /// `DELETE /admin/products/{id}`.
    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        let response = self.delete(&format!("/admin/products/{id}")).send().await?;
        check_status(response, CTX_ADMIN_PRODUCTS).await
    }

    // ---- categories ----

    /// `GET /admin/categories` — same shape as the public list.
    pub async fn categories(&self) -> ApiResult<Vec<Category>> {
        let response = self.get("/admin/categories").send().await?;
        parse_response(response, CTX_ADMIN_CATEGORIES).await
    }

    /// `POST /categories`.
    pub async fn create_category(&self, input: &CategoryInput) -> ApiResult<Category> {
        let response = self.post("/categories").json(input).send().await?;
        tracing::info!(name = %input.name, "Category created");
        parse_response(response, CTX_ADMIN_CATEGORIES).await
    }

    /// `PUT /categories/{id}`.
    pub async fn update_category(&self, id: &str, input: &CategoryInput) -> ApiResult<Category> {
        let response = self
            .put(&format!("/categories/{id}"))
            .json(input)
            .send()
            .await?;
        parse_response(response, CTX_ADMIN_CATEGORIES).await
    }

    /// `DELETE /categories/{id}`.
    ///
    /// The backend rejects deletion of a category with children; the
    /// resulting 409 is surfaced unchanged for the UI to explain.
    pub async fn delete_category(&self, id: &str) -> ApiResult<()> {
        let response = self.delete(&format!("/categories/{id}")).send().await?;
        check_status(response, CTX_ADMIN_CATEGORIES).await
    }

    // ---- services ----

    /// `POST /admin/services`.
    pub async fn create_service(&self, input: &ServiceInput) -> ApiResult<Service> {
        let response = self.post("/admin/services").json(input).send().await?;
        parse_response(response, CTX_ADMIN_SERVICES).await
    }

    /// `PUT /admin/services/{id}`.
    pub async fn update_service(&self, id: &str, input: &ServiceInput) -> ApiResult<Service> {
        let response = self
            .put(&format!("/admin/services/{id}"))
            .json(input)
            .send()
            .await?;
        parse_response(response, CTX_ADMIN_SERVICES).await
    }

    /// `DELETE /admin/services/{id}`.
    pub async fn delete_service(&self, id: &str) -> ApiResult<()> {
        let response = self.delete(&format!("/admin/services/{id}")).send().await?;
        check_status(response, CTX_ADMIN_SERVICES).await
    }

    // ---- works ----

    /// `POST /works`.
    pub async fn create_work(&self, input: &WorkInput) -> ApiResult<Work> {
        let response = self.post("/works").json(input).send().await?;
        parse_response(response, CTX_ADMIN_WORKS).await
    }

    /// `PUT /works/{id}`.
    pub async fn update_work(&self, id: &str, input: &WorkInput) -> ApiResult<Work> {
        let response = self.put(&format!("/works/{id}")).json(input).send().await?;
        parse_response(response, CTX_ADMIN_WORKS).await
    }

    /// `DELETE /works/{id}`.
    pub async fn delete_work(&self, id: &str) -> ApiResult<()> {
        let response = self.delete(&format!("/works/{id}")).send().await?;
        check_status(response, CTX_ADMIN_WORKS).await
    }

    // ---- menu ----

    /// `POST /menu`.
    pub async fn create_menu_item(&self, input: &MenuItemInput) -> ApiResult<MenuItem> {
        let response = self.post("/menu").json(input).send().await?;
        parse_response(response, CTX_ADMIN_MENU).await
    }

    /// `PUT /menu/{id}`.
    pub async fn update_menu_item(&self, id: &str, input: &MenuItemInput) -> ApiResult<MenuItem> {
        let response = self.put(&format!("/menu/{id}")).json(input).send().await?;
        parse_response(response, CTX_ADMIN_MENU).await
    }

    /// `DELETE /menu/{id}`.
    pub async fn delete_menu_item(&self, id: &str) -> ApiResult<()> {
        let response = self.delete(&format!("/menu/{id}")).send().await?;
        check_status(response, CTX_ADMIN_MENU).await
    }

    // ---- orders ----

    /// `GET /admin/orders`.
    pub async fn orders(&self) -> ApiResult<Vec<Order>> {
        let response = self.get("/admin/orders").send().await?;
        parse_response(response, CTX_ADMIN_ORDERS).await
    }

    /// `PATCH /admin/orders/{id}/status`.
    pub async fn set_order_status(&self, id: &str, status: OrderStatus) -> ApiResult<Order> {
        let body = serde_json::json!({ "status": status });
        let response = self
            .patch(&format!("/admin/orders/{id}/status"))
            .json(&body)
            .send()
            .await?;
        parse_response(response, CTX_ADMIN_ORDERS).await
    }
}
