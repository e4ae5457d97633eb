//! # printbill-domain
//!
//! Pure domain model for the printbill billing application.
//!
//! ## Responsibilities
//! - Foundational types: the [`ServiceId`](id::ServiceId) identifier and error conventions
//! - Define **Services** (billable print services held in the catalog)
//! - Define **Service metadata** (the pricing hints a transaction form consumes)
//! - Define **Form state** (visibility of the variable price section)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod form;
pub mod id;
pub mod service;
