//! Metadata source port: remote lookup of a service's pricing hints.
//!
//! Adapters issue `GET /api/service/{id}` and decode the JSON body into
//! [`ServiceMetadata`]. The returned future is not required to be `Send`:
//! browser fetches are bound to the JS event loop.

use std::future::Future;

use printbill_domain::id::ServiceId;
use printbill_domain::service::ServiceMetadata;

/// Why a metadata lookup failed.
///
/// Carries messages rather than adapter error types so that native and
/// browser HTTP clients report through the same type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, CORS, …).
    #[error("network error: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The body was not the expected JSON document.
    #[error("malformed response: {message}")]
    Decode { message: String },
}

/// Fetches [`ServiceMetadata`] for a selected service.
pub trait ServiceMetadataSource {
    /// Look up the pricing hints for `id`.
    fn fetch_metadata(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<ServiceMetadata, FetchError>>;
}

impl<T: ServiceMetadataSource + ?Sized> ServiceMetadataSource for &T {
    fn fetch_metadata(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<ServiceMetadata, FetchError>> {
        (**self).fetch_metadata(id)
    }
}

impl<T: ServiceMetadataSource + ?Sized> ServiceMetadataSource for std::sync::Arc<T> {
    fn fetch_metadata(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<ServiceMetadata, FetchError>> {
        (**self).fetch_metadata(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Fixed(ServiceMetadata);

    impl ServiceMetadataSource for Fixed {
        fn fetch_metadata(
            &self,
            _id: &ServiceId,
        ) -> impl Future<Output = Result<ServiceMetadata, FetchError>> {
            let metadata = self.0;
            async move { Ok(metadata) }
        }
    }

    async fn fetch<S: ServiceMetadataSource>(source: S) -> Result<ServiceMetadata, FetchError> {
        source.fetch_metadata(&ServiceId::new("1").unwrap()).await
    }

    #[tokio::test]
    async fn should_forward_through_shared_and_borrowed_sources() {
        let metadata = ServiceMetadata {
            variable_pricing: true,
            min_price: Some(1.0),
            max_price: None,
        };
        let source = Arc::new(Fixed(metadata));

        assert_eq!(fetch(&source).await, Ok(metadata));
        assert_eq!(fetch(Arc::clone(&source)).await, Ok(metadata));
    }
}
