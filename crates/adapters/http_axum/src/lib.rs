//! # printbill-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **service metadata endpoint** the transaction form calls on
//!   every selection change: `GET /api/service/{id}`
//! - Serve a small **catalog API** (`/api/services`) used to populate the
//!   service selector and to manage services
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `printbill-app` (for port traits and services) and `printbill-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
