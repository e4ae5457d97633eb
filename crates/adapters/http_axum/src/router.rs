//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use printbill_app::ports::ServiceRepository;

use crate::state::AppState;

/// Plain-text greeting served at `/`.
pub const GREETING: &str = "Hello from Print Arts Billing App!";

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` with the greeting at `/` and the health
/// probe. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    GREETING
}

async fn health_check() -> &'static str {
    "OK"
}
