//! REST client for the remote storefront backend.
//!
//! [`StorefrontApi`] covers the public read endpoints plus order
//! submission and login; [`AdminApi`] carries a bearer token and covers
//! the management endpoints. Every call follows the same contract: a
//! transport failure becomes [`ApiError::Request`], a non-2xx status
//! becomes [`ApiError::Status`] with a fixed message for the endpoint
//! family, and callers translate those into page state.

pub mod admin;
pub mod auth;
pub mod config;
pub mod error;
pub mod storefront;

pub use admin::AdminApi;
pub use auth::AuthToken;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use storefront::StorefrontApi;
