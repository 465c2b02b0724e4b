//! Home page: featured products plus a portfolio teaser.
//!
//! The two fetches are independent and run concurrently. The works
//! strip is secondary content: if its fetch fails the page falls back
//! to static placeholder entries instead of failing the whole view.

use obelisk_client::StorefrontApi;
use obelisk_core::product::Product;
use obelisk_core::work::Work;

use crate::state::PageState;

pub struct HomePage {
    pub featured: PageState<Vec<Product>>,
    /// Portfolio teaser; placeholders when the fetch fails.
    pub works: Vec<Work>,
    /// True when `works` holds the static fallback.
    pub works_degraded: bool,
}

/// Static portfolio entries shown when the works fetch fails.
fn placeholder_works() -> Vec<Work> {
    let entry = |id: &str, title: &str| Work {
        id: id.into(),
        title: title.into(),
        description: "Фотографии выполненных работ появятся здесь".into(),
        image_url: None,
        category: None,
        location: None,
        year: None,
    };
    vec![
        entry("placeholder-1", "Вертикальный памятник из гранита"),
        entry("placeholder-2", "Мемориальный комплекс"),
        entry("placeholder-3", "Гравировка портрета"),
    ]
}

impl HomePage {
    /// Fetch both sections concurrently and assemble the page.
    pub async fn load(api: &StorefrontApi) -> Self {
        let (featured, works) = tokio::join!(api.featured_products(), api.works());

        let (works, works_degraded) = match works {
            Ok(list) => (list, false),
            Err(e) => {
                tracing::warn!(error = %e, "Works fetch failed, using placeholders");
                (placeholder_works(), true)
            }
        };

        Self {
            featured: PageState::from_result(featured),
            works,
            works_degraded,
        }
    }
}
