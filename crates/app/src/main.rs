//! Smoke-walks the public storefront pages against a live backend and
//! logs one summary line per page. Page failures are logged and
//! tolerated; only a broken configuration exits non-zero.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obelisk_catalog::CategoryCache;
use obelisk_client::{ApiConfig, StorefrontApi};
use obelisk_pages::catalog::CatalogPage;
use obelisk_pages::home::HomePage;
use obelisk_pages::sale::SalePage;
use obelisk_pages::services::ServicesPage;
use obelisk_pages::works::WorksPage;
use obelisk_pages::PageState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obelisk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loaded API configuration");

    let api = StorefrontApi::new(&config).expect("Failed to build HTTP client");
    let cache = CategoryCache::new(api.clone());

    // -- Home --
    let home = HomePage::load(&api).await;
    log_collection("home/featured", &home.featured);
    tracing::info!(
        works = home.works.len(),
        degraded = home.works_degraded,
        "Home works strip"
    );

    // -- Catalog --
    let mut catalog = CatalogPage::new();
    catalog.load(&api, &cache).await;
    match &catalog.state {
        PageState::Ready(view) => tracing::info!(
            products = view.result_count(),
            pages = view.total_pages(),
            "Catalog loaded"
        ),
        PageState::Failed(msg) => tracing::warn!(error = %msg, "Catalog failed"),
        PageState::Loading => {}
    }

    // -- Sale --
    let sale = SalePage::load(&api, Utc::now()).await;
    log_collection("sale", &sale.state);

    // -- Services --
    let services = ServicesPage::load(&api).await;
    log_collection("services", &services.state);

    // -- Works --
    let works = WorksPage::load(&api).await;
    log_collection("works", &works.state);
}

fn log_collection<T>(page: &str, state: &PageState<Vec<T>>) {
    match state {
        PageState::Ready(items) => tracing::info!(page, count = items.len(), "Page loaded"),
        PageState::Failed(msg) => tracing::warn!(page, error = %msg, "Page failed"),
        PageState::Loading => {}
    }
}
