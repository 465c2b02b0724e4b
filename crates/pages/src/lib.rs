//! Page view-models for the storefront and the admin panel.
//!
//! Each page owns its fetch-and-render cycle: it fetches what it needs
//! on load, holds the result as a [`PageState`], and converts every
//! fetch failure into a user-visible message at the page level. Nothing
//! bubbles past a page; an empty collection is a "not found" empty
//! state, never an error.

pub mod admin;
pub mod catalog;
pub mod home;
pub mod product;
pub mod sale;
pub mod services;
pub mod state;
pub mod works;

pub use state::PageState;
