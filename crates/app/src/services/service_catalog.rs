//! Service catalog: use-cases for managing billable services.

use printbill_domain::error::{ConflictError, NotFoundError, PrintBillError};
use printbill_domain::id::ServiceId;
use printbill_domain::service::{Service, ServiceMetadata};

use crate::ports::ServiceRepository;

/// Application service for catalog CRUD and metadata lookups.
pub struct ServiceCatalog<R> {
    repo: R,
}

impl<R: ServiceRepository> ServiceCatalog<R> {
    /// Create a new catalog backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new service after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PrintBillError::Validation`] if invariants fail,
    /// [`PrintBillError::Conflict`] if a service with the same id exists,
    /// or a storage error propagated from the repository.
    pub async fn create_service(&self, service: Service) -> Result<Service, PrintBillError> {
        service.validate()?;
        if self.repo.get_by_id(&service.id).await?.is_some() {
            return Err(ConflictError {
                entity: "Service",
                id: service.id.to_string(),
            }
            .into());
        }
        self.repo.create(service).await
    }

    /// Create `service` unless one with the same id already exists.
    ///
    /// Returns `true` when the service was created.
    ///
    /// # Errors
    ///
    /// Returns [`PrintBillError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn ensure_service(&self, service: Service) -> Result<bool, PrintBillError> {
        match self.create_service(service).await {
            Ok(_) => Ok(true),
            Err(PrintBillError::Conflict(err)) => {
                tracing::debug!(service_id = %err.id, "service already present, skipping");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PrintBillError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_service(&self, id: &ServiceId) -> Result<Service, PrintBillError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Pricing hints for the transaction form.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_service`].
    pub async fn get_metadata(&self, id: &ServiceId) -> Result<ServiceMetadata, PrintBillError> {
        self.get_service(id).await.map(|service| service.metadata())
    }

    /// List all services.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<Service>, PrintBillError> {
        self.repo.get_all().await
    }

    /// Delete a service by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_service(&self, id: &ServiceId) -> Result<(), PrintBillError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printbill_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryServiceRepo {
        store: Mutex<HashMap<ServiceId, Service>>,
    }

    impl ServiceRepository for InMemoryServiceRepo {
        fn create(
            &self,
            service: Service,
        ) -> impl Future<Output = Result<Service, PrintBillError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(service.id.clone(), service.clone());
            async { Ok(service) }
        }

        fn get_by_id(
            &self,
            id: &ServiceId,
        ) -> impl Future<Output = Result<Option<Service>, PrintBillError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, PrintBillError>> + Send {
            let store = self.store.lock().unwrap();
            let mut result: Vec<Service> = store.values().cloned().collect();
            result.sort_by(|a, b| a.name.cmp(&b.name));
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: &ServiceId,
        ) -> impl Future<Output = Result<(), PrintBillError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(id);
            async { Ok(()) }
        }
    }

    fn make_catalog() -> ServiceCatalog<InMemoryServiceRepo> {
        ServiceCatalog::new(InMemoryServiceRepo::default())
    }

    fn poster() -> Service {
        Service::builder()
            .id("42")
            .name("Poster print")
            .variable_pricing(true)
            .min_price(5.0)
            .max_price(100.0)
            .build()
            .unwrap()
    }

    fn id(value: &str) -> ServiceId {
        ServiceId::new(value).unwrap()
    }

    #[tokio::test]
    async fn should_create_service_when_valid() {
        let catalog = make_catalog();

        let created = catalog.create_service(poster()).await.unwrap();
        assert_eq!(created.id, id("42"));

        let fetched = catalog.get_service(&id("42")).await.unwrap();
        assert_eq!(fetched.name, "Poster print");
    }

    #[tokio::test]
    async fn should_reject_invalid_service_on_create() {
        let catalog = make_catalog();
        let mut service = poster();
        service.name = String::new();

        let result = catalog.create_service(service).await;
        assert!(matches!(
            result,
            Err(PrintBillError::Validation(ValidationError::EmptyName))
        ));
        assert!(catalog.list_services().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_on_create() {
        let catalog = make_catalog();
        catalog.create_service(poster()).await.unwrap();

        let mut renamed = poster();
        renamed.name = "Renamed".to_string();
        let result = catalog.create_service(renamed).await;

        assert!(matches!(
            result,
            Err(PrintBillError::Conflict(ConflictError { ref id, .. })) if id == "42"
        ));
        let fetched = catalog.get_service(&id("42")).await.unwrap();
        assert_eq!(fetched.name, "Poster print");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_service() {
        let catalog = make_catalog();
        let result = catalog.get_service(&id("99")).await;
        assert!(matches!(result, Err(PrintBillError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_metadata_for_known_service() {
        let catalog = make_catalog();
        catalog.create_service(poster()).await.unwrap();

        let metadata = catalog.get_metadata(&id("42")).await.unwrap();
        assert!(metadata.variable_pricing);
        assert_eq!(metadata.min_price, Some(5.0));
        assert_eq!(metadata.max_price, Some(100.0));
    }

    #[tokio::test]
    async fn should_not_overwrite_existing_service_when_ensuring() {
        let catalog = make_catalog();
        catalog.create_service(poster()).await.unwrap();

        let mut renamed = poster();
        renamed.name = "Renamed".to_string();
        let created = catalog.ensure_service(renamed).await.unwrap();

        assert!(!created);
        let fetched = catalog.get_service(&id("42")).await.unwrap();
        assert_eq!(fetched.name, "Poster print");
    }

    #[tokio::test]
    async fn should_create_missing_service_when_ensuring() {
        let catalog = make_catalog();
        assert!(catalog.ensure_service(poster()).await.unwrap());
        assert_eq!(catalog.list_services().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_service() {
        let catalog = make_catalog();
        catalog.create_service(poster()).await.unwrap();

        catalog.delete_service(&id("42")).await.unwrap();

        let result = catalog.get_service(&id("42")).await;
        assert!(matches!(result, Err(PrintBillError::NotFound(_))));
    }
}
