//! Public storefront endpoints.
//!
//! One method per endpoint. All calls go through the shared
//! [`parse_response`]/[`check_status`] helpers so the error contract is
//! identical everywhere: non-2xx becomes [`ApiError::Status`] with the
//! endpoint family's fixed message.

use obelisk_core::category::Category;
use obelisk_core::menu::MenuItem;
use obelisk_core::order::OrderForm;
use obelisk_core::product::Product;
use obelisk_core::service::Service;
use obelisk_core::work::Work;

use crate::auth::{AuthToken, LoginRequest};
use crate::config::ApiConfig;
use crate::error::{check_status, parse_response, ApiResult};

/// Fixed error messages per endpoint family.
pub(crate) const CTX_PRODUCTS: &str = "failed to load products";
pub(crate) const CTX_CATEGORIES: &str = "failed to load categories";
pub(crate) const CTX_SERVICES: &str = "failed to load services";
pub(crate) const CTX_WORKS: &str = "failed to load works";
pub(crate) const CTX_MENU: &str = "failed to load menu";
pub(crate) const CTX_ORDERS: &str = "failed to submit order";
pub(crate) const CTX_AUTH: &str = "login failed";

/// HTTP client for the public storefront API.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: reqwest::Client,
    base_url: String,
}

impl StorefrontApi {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.build_client()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for sharing one connection pool with [`crate::AdminApi`]).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    // ---- products ----

    /// `GET /products` — the full catalog.
    pub async fn products(&self) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_PRODUCTS).await
    }

    /// `GET /products/featured` — home-page selection.
    pub async fn featured_products(&self) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(format!("{}/products/featured", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_PRODUCTS).await
    }

    /// `GET /products/{id}`.
    pub async fn product(&self, id: &str) -> ApiResult<Product> {
        let response = self
            .client
            .get(format!("{}/products/{id}", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_PRODUCTS).await
    }

    /// `GET /products/category/{id}` — server-side category filter.
    pub async fn products_by_category(&self, category_id: &str) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(format!("{}/products/category/{category_id}", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_PRODUCTS).await
    }

    // ---- categories ----

    /// `GET /categories` — flat list.
    pub async fn categories(&self) -> ApiResult<Vec<Category>> {
        let response = self
            .client
            .get(format!("{}/categories", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_CATEGORIES).await
    }

    /// `GET /categories/{id}`.
    pub async fn category(&self, id: &str) -> ApiResult<Category> {
        let response = self
            .client
            .get(format!("{}/categories/{id}", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_CATEGORIES).await
    }

    /// `GET /categories/hierarchical` — parents with nested children.
    pub async fn categories_hierarchical(&self) -> ApiResult<Vec<Category>> {
        let response = self
            .client
            .get(format!("{}/categories/hierarchical", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_CATEGORIES).await
    }

    /// `GET /categories/parents` — top-level categories only.
    pub async fn parent_categories(&self) -> ApiResult<Vec<Category>> {
        let response = self
            .client
            .get(format!("{}/categories/parents", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_CATEGORIES).await
    }

    // ---- services ----

    /// `GET /services` — every service, active or not.
    pub async fn services(&self) -> ApiResult<Vec<Service>> {
        let response = self
            .client
            .get(format!("{}/services", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_SERVICES).await
    }

    /// `GET /services/{id}`.
    pub async fn service(&self, id: &str) -> ApiResult<Service> {
        let response = self
            .client
            .get(format!("{}/services/{id}", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_SERVICES).await
    }

    /// `GET /services/active` — public listing.
    pub async fn active_services(&self) -> ApiResult<Vec<Service>> {
        let response = self
            .client
            .get(format!("{}/services/active", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_SERVICES).await
    }

    /// `GET /services/hierarchical` — services with nested sub-services.
    pub async fn services_hierarchical(&self) -> ApiResult<Vec<Service>> {
        let response = self
            .client
            .get(format!("{}/services/hierarchical", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_SERVICES).await
    }

    // ---- works ----

    /// `GET /works` — the portfolio.
    pub async fn works(&self) -> ApiResult<Vec<Work>> {
        let response = self
            .client
            .get(format!("{}/works", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_WORKS).await
    }

    /// `GET /works/{id}`.
    pub async fn work(&self, id: &str) -> ApiResult<Work> {
        let response = self
            .client
            .get(format!("{}/works/{id}", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_WORKS).await
    }

    // ---- menu ----

    /// `GET /menu` — navigation entries.
    pub async fn menu(&self) -> ApiResult<Vec<MenuItem>> {
        let response = self
            .client
            .get(format!("{}/menu", self.base_url))
            .send()
            .await?;
        parse_response(response, CTX_MENU).await
    }

    // ---- orders ----

    /// `POST /orders` — submit a lead-capture order.
    ///
    /// The form is validated locally first; an invalid form never
    /// reaches the network.
    pub async fn submit_order(&self, form: &OrderForm) -> ApiResult<()> {
        form.check()?;
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .json(form)
            .send()
            .await?;
        tracing::info!(name = %form.name, "Order submitted");
        check_status(response, CTX_ORDERS).await
    }

    // ---- auth ----

    /// `POST /auth/login` — exchange credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthToken> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&body)
            .send()
            .await?;
        parse_response(response, CTX_AUTH).await
    }
}
