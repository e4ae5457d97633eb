//! # printbill-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository`: persistence for the service catalog
//!   - `ServiceMetadataSource`: remote lookup of a service's pricing hints
//!   - `SectionVisibility` / `PriceInputConstraints`: the transaction form
//!     widgets the resolver drives
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ServiceCatalog`: create, get, list, delete services (backend)
//!   - `ServiceDetailResolver`: react to a service selection in the form (frontend)
//! - Orchestrate domain objects without knowing *how* persistence, HTTP or the DOM work
//!
//! ## Dependency rule
//! Depends on `printbill-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
