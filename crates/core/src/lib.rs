//! Domain model for the Obelisk storefront.
//!
//! This crate has no I/O: it defines the entities served by the remote
//! backend (products, categories, services, works, orders, menu items),
//! the shared error type, and the business predicates that must stay
//! identical across every call site (sale gating, order validation).

pub mod category;
pub mod error;
pub mod menu;
pub mod order;
pub mod product;
pub mod service;
pub mod types;
pub mod work;

pub use error::CoreError;
pub use types::{EntityId, Timestamp};
