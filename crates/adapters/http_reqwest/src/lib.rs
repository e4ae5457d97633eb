//! # printbill-adapter-http-reqwest
//!
//! Native implementation of the [`ServiceMetadataSource`] port.
//!
//! ## Responsibilities
//! - Issue `GET {base}/api/service/{id}` with [reqwest](https://docs.rs/reqwest)
//! - Classify failures into [`FetchError`] (network, non-2xx status, malformed body)
//!
//! No retries and no request timeout are configured: a lookup either
//! resolves or fails with whatever the HTTP stack reports.
//!
//! ## Dependency rule
//! Depends on `printbill-app` (for the port) and `printbill-domain`.
//!
//! [`ServiceMetadataSource`]: printbill_app::ports::ServiceMetadataSource
//! [`FetchError`]: printbill_app::ports::FetchError

mod client;
mod error;

pub use client::HttpServiceMetadataSource;
pub use error::ClientError;
