//! Admin login.
//!
//! The token lives only in memory for the duration of the session;
//! nothing is persisted across page loads.

use obelisk_client::{AdminApi, StorefrontApi};

pub struct AdminSession {
    pub api: AdminApi,
}

impl AdminSession {
    /// Exchange credentials for a bearer token and build the admin
    /// client on the same connection pool. The error string is the
    /// message the login form displays.
    pub async fn login(
        storefront: &StorefrontApi,
        username: &str,
        password: &str,
    ) -> Result<Self, String> {
        match storefront.login(username, password).await {
            Ok(auth) => {
                tracing::info!(username, "Admin logged in");
                Ok(Self {
                    api: AdminApi::new(storefront, auth.token),
                })
            }
            Err(e) => {
                tracing::warn!(username, error = %e, "Login failed");
                Err(e.to_string())
            }
        }
    }
}
