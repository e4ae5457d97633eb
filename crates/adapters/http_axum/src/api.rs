//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::get;

use printbill_app::ports::ServiceRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        // Metadata lookup used by the transaction form
        .route("/service/{id}", get(services::metadata::<R>))
        // Catalog
        .route(
            "/services",
            get(services::list::<R>).post(services::create::<R>),
        )
        .route(
            "/services/{id}",
            get(services::get::<R>).delete(services::delete::<R>),
        )
}
