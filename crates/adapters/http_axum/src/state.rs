//! Shared application state for axum handlers.

use std::sync::Arc;

use printbill_app::ports::ServiceRepository;
use printbill_app::services::service_catalog::ServiceCatalog;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Service catalog use-cases.
    pub service_catalog: Arc<ServiceCatalog<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service_catalog: Arc::clone(&self.service_catalog),
        }
    }
}

impl<R> AppState<R>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    /// Create a new application state from the catalog service.
    pub fn new(service_catalog: ServiceCatalog<R>) -> Self {
        Self::from_arc(Arc::new(service_catalog))
    }

    /// Create a new application state from a catalog that is already shared,
    /// e.g. with the startup seeding task.
    pub fn from_arc(service_catalog: Arc<ServiceCatalog<R>>) -> Self {
        Self { service_catalog }
    }
}
