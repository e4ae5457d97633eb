//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use printbill_app::ports::{FetchError, ServiceMetadataSource};
use printbill_domain::id::ServiceId;
use printbill_domain::service::{Service, ServiceMetadata};
use serde::Deserialize;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// `/api/service/{id}` on the page's own origin, with `id` percent-encoded
/// as a single path segment.
fn metadata_path(id: &ServiceId) -> String {
    format!("/api/service/{}", urlencoding::encode(id.as_str()))
}

/// Fetch all services from the API, to populate the service selector.
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    let resp = check_response(Request::get("/api/services").send().await?).await?;
    let services: Vec<Service> = resp.json().await?;
    Ok(services)
}

/// Browser implementation of [`ServiceMetadataSource`] calling
/// `GET /api/service/{id}` on the page's own origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooServiceMetadataSource;

impl ServiceMetadataSource for GlooServiceMetadataSource {
    fn fetch_metadata(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<ServiceMetadata, FetchError>> {
        let url = metadata_path(id);
        async move {
            let resp = Request::get(&url)
                .send()
                .await
                .map_err(|err| FetchError::Network {
                    message: err.to_string(),
                })?;
            if !resp.ok() {
                return Err(FetchError::Status {
                    status: resp.status(),
                });
            }
            let body = resp.text().await.map_err(|err| FetchError::Network {
                message: err.to_string(),
            })?;
            serde_json::from_str(&body).map_err(|err| FetchError::Decode {
                message: err.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_for(id: &str) -> String {
        metadata_path(&ServiceId::new(id).unwrap())
    }

    #[test]
    fn should_leave_plain_identifiers_untouched() {
        assert_eq!(path_for("42"), "/api/service/42");
        assert_eq!(path_for("poster-a2_v1.0~"), "/api/service/poster-a2_v1.0~");
    }

    #[test]
    fn should_escape_reserved_characters() {
        assert_eq!(path_for("a b/c"), "/api/service/a%20b%2Fc");
        assert_eq!(path_for("50%?"), "/api/service/50%25%3F");
    }

    #[test]
    fn should_escape_multibyte_characters_per_byte() {
        assert_eq!(path_for("é"), "/api/service/%C3%A9");
    }
}
