use obelisk_core::CoreError;

/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code. `context` is the
    /// fixed descriptive message for the endpoint family.
    #[error("{context} ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Fixed message for the endpoint family, e.g. "failed to load products".
        context: &'static str,
        /// Raw response body for debugging.
        body: String,
    },

    /// A domain-level error raised before the request was sent
    /// (e.g. order-form validation).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience alias for client call results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Core(_) => None,
        }
    }

    /// Whether the backend rejected the call as a conflict (409),
    /// e.g. deleting a category that still has children.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or an [`ApiError::Status`] carrying the
/// endpoint-family context and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
    context: &'static str,
) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            context,
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    context: &'static str,
) -> ApiResult<T> {
    let response = ensure_success(response, context).await?;
    Ok(response.json::<T>().await?)
}

/// Assert the response has a success status code, discarding the body.
pub(crate) async fn check_status(
    response: reqwest::Response,
    context: &'static str,
) -> ApiResult<()> {
    ensure_success(response, context).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_carries_family_context() {
        let err = ApiError::Status {
            status: 404,
            context: "failed to load products",
            body: "{}".into(),
        };
        assert_eq!(err.to_string(), "failed to load products (404): {}");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_conflict());
    }

    #[test]
    fn conflict_is_detected_from_status() {
        let err = ApiError::Status {
            status: 409,
            context: "failed to delete category",
            body: "category has children".into(),
        };
        assert!(err.is_conflict());
    }
}
