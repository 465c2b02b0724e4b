//! Portfolio pages: full works gallery and a single-work detail view.

use obelisk_client::StorefrontApi;
use obelisk_core::work::Work;

use crate::state::PageState;

pub struct WorksPage {
    pub state: PageState<Vec<Work>>,
}

impl WorksPage {
    pub async fn load(api: &StorefrontApi) -> Self {
        Self {
            state: PageState::from_result(api.works().await),
        }
    }
}

pub struct WorkDetailPage {
    pub state: PageState<Work>,
}

impl WorkDetailPage {
    pub async fn load(api: &StorefrontApi, id: &str) -> Self {
        let state = match api.work(id).await {
            Ok(work) => PageState::Ready(work),
            Err(e) => {
                tracing::warn!(error = %e, work_id = id, "Work fetch failed");
                PageState::Failed(e.to_string())
            }
        };
        Self { state }
    }
}
