//! Storage port: repository trait for the service catalog.

use std::future::Future;

use printbill_domain::error::PrintBillError;
use printbill_domain::id::ServiceId;
use printbill_domain::service::Service;

/// Repository for persisting and querying [`Service`]s.
pub trait ServiceRepository {
    /// Persist a new service.
    fn create(
        &self,
        service: Service,
    ) -> impl Future<Output = Result<Service, PrintBillError>> + Send;

    /// Get a service by its identifier.
    fn get_by_id(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, PrintBillError>> + Send;

    /// Get all services, ordered by name.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, PrintBillError>> + Send;

    /// Delete a service by its identifier. Deleting an unknown id is not an error.
    fn delete(&self, id: &ServiceId) -> impl Future<Output = Result<(), PrintBillError>> + Send;
}
