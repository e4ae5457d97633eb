//! reqwest-backed metadata source.

use std::future::Future;

use url::Url;

use printbill_app::ports::{FetchError, ServiceMetadataSource};
use printbill_domain::id::ServiceId;
use printbill_domain::service::ServiceMetadata;

use crate::error::ClientError;

/// Fetches service metadata from a printbill backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpServiceMetadataSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpServiceMetadataSource {
    /// Create a source rooted at `base_url` (e.g. `http://127.0.0.1:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL is invalid or cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(client, base_url)
    }

    /// Create a source that reuses an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL is invalid or cannot carry a path.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// `{base}/api/service/{id}`, with `id` percent-encoded as one path segment.
    #[must_use]
    pub fn metadata_url(&self, id: &ServiceId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "service", id.as_str()]);
        }
        url
    }

    async fn fetch(&self, id: &ServiceId) -> Result<ServiceMetadata, FetchError> {
        let url = self.metadata_url(id);
        tracing::debug!(%url, "fetching service metadata");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|err| {
            if err.is_decode() {
                FetchError::Decode {
                    message: err.to_string(),
                }
            } else {
                FetchError::Network {
                    message: err.to_string(),
                }
            }
        })
    }
}

impl ServiceMetadataSource for HttpServiceMetadataSource {
    fn fetch_metadata(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<ServiceMetadata, FetchError>> {
        self.fetch(id)
    }
}
