//! Services listing (hierarchical, active only) and service detail
//! with an image gallery.

use obelisk_catalog::GalleryCursor;
use obelisk_client::StorefrontApi;
use obelisk_core::service::Service;

use crate::state::PageState;

pub struct ServicesPage {
    pub state: PageState<Vec<Service>>,
}

impl ServicesPage {
    /// Fetch the hierarchical service tree and hide inactive entries.
    pub async fn load(api: &StorefrontApi) -> Self {
        let state = PageState::from_result(
            api.services_hierarchical().await.map(prune_inactive),
        );
        Self { state }
    }
}

/// Drop inactive services at both levels of the tree.
fn prune_inactive(services: Vec<Service>) -> Vec<Service> {
    services
        .into_iter()
        .filter(|s| s.is_active)
        .map(|mut s| {
            if let Some(children) = s.children.take() {
                s.children = Some(children.into_iter().filter(|c| c.is_active).collect());
            }
            s
        })
        .collect()
}

pub struct ServiceDetailPage {
    pub state: PageState<ServiceDetail>,
}

pub struct ServiceDetail {
    pub service: Service,
    pub gallery: GalleryCursor,
}

impl ServiceDetailPage {
    /// `GET /services/{id}` plus a gallery cursor over its images.
    pub async fn load(api: &StorefrontApi, id: &str) -> Self {
        let state = match api.service(id).await {
            Ok(service) => {
                let gallery = GalleryCursor::new(service.images.len());
                PageState::Ready(ServiceDetail { service, gallery })
            }
            Err(e) => {
                tracing::warn!(error = %e, service_id = id, "Service fetch failed");
                PageState::Failed(e.to_string())
            }
        };
        Self { state }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, active: bool, children: Option<Vec<Service>>) -> Service {
        Service {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            short_description: None,
            images: vec![],
            is_active: active,
            children,
        }
    }

    #[test]
    fn inactive_parents_and_children_are_pruned() {
        let tree = vec![
            service(
                "install",
                true,
                Some(vec![service("fundament", true, None), service("old", false, None)]),
            ),
            service("hidden", false, None),
        ];

        let pruned = prune_inactive(tree);
        assert_eq!(pruned.len(), 1);
        let children = pruned[0].children.as_ref().expect("children kept");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, "fundament");
    }
}
