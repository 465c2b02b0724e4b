//! Admin panel view-models.
//!
//! All of these sit on an authenticated [`obelisk_client::AdminApi`].
//! Mutations follow one pattern: call the endpoint, translate a
//! failure into a user-visible message, and reload or patch local
//! state only on success.

pub mod categories;
pub mod content;
pub mod orders;
pub mod session;

pub use categories::{CategoryAdminPage, CATEGORY_HAS_CHILDREN_WARNING};
pub use content::ContentAdmin;
pub use orders::OrdersAdminPage;
pub use session::AdminSession;
