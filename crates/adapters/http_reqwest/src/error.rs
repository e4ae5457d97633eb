//! Construction errors for the HTTP client adapter.

use thiserror::Error;

/// Errors raised while configuring [`HttpServiceMetadataSource`](crate::HttpServiceMetadataSource).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base URL {0} cannot be used as an API root")]
    NotABase(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
