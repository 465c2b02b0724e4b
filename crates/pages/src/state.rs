//! Render state shared by every page.

/// What a page shows for one piece of fetched data: a loading skeleton,
/// the data itself, or an inline error message. An empty collection is
/// `Ready(vec![])` — "not found" is rendered by the page, it is not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    /// The error message, when the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The data, when ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Build from a fetch result, logging the failure at the page level.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(e) => {
                tracing::warn!(error = %e, "Page fetch failed");
                PageState::Failed(e.to_string())
            }
        }
    }
}
