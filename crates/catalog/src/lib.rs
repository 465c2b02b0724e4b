//! Catalog view-model pipeline.
//!
//! The products listing recomputes filter → sort → paginate
//! synchronously on every parameter change; [`CatalogView`] owns the
//! parameters and enforces the page-reset invariant. The crate also
//! hosts the pieces the listing leans on: the shared category cache,
//! the two-tier category labeler, the image-gallery cursor, and the
//! stale-response guard for in-flight fetches.

pub mod cache;
pub mod filter;
pub mod freshness;
pub mod gallery;
pub mod paginate;
pub mod resolve;
pub mod sort;
pub mod view;

pub use cache::CategoryCache;
pub use filter::{filter_products, CategoryFilter};
pub use freshness::{RequestSequence, Ticket};
pub use gallery::GalleryCursor;
pub use paginate::{paginate, total_pages};
pub use resolve::{resolve_category_label, CategoryLabel};
pub use sort::{sort_products, SortKey};
pub use view::CatalogView;
