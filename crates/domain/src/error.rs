//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PrintBillError`] via `#[from]` (or an explicit `From` impl for boxed
//! adapter errors such as storage).

/// Top-level error returned by domain validation and application services.
#[derive(Debug, thiserror::Error)]
pub enum PrintBillError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,

    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must be a finite, non-negative number")]
    InvalidPrice { field: &'static str },

    #[error("min_price {min} is greater than max_price {max}")]
    InvertedBounds { min: f64, max: f64 },
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An entity with the same identifier already exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
