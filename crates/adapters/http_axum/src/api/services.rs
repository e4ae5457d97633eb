//! JSON REST handlers for the service catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use printbill_app::ports::ServiceRepository;
use printbill_domain::id::ServiceId;
use printbill_domain::service::{Service, ServiceMetadata};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a service. `id` may be a string or a number.
#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub variable_pricing: bool,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl CreateServiceRequest {
    fn into_service(self) -> Result<Service, ApiError> {
        let mut builder = Service::builder()
            .id(self.id)
            .name(self.name)
            .variable_pricing(self.variable_pricing);
        if let Some(min) = self.min_price {
            builder = builder.min_price(min);
        }
        if let Some(max) = self.max_price {
            builder = builder.max_price(max);
        }
        builder.build().map_err(ApiError::from)
    }
}

/// Possible responses from the metadata endpoint.
pub enum MetadataResponse {
    Ok(Json<ServiceMetadata>),
}

impl IntoResponse for MetadataResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Service>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/service/{id}`
///
/// Pricing hints for the transaction form:
/// `{ "variable_pricing": bool, "min_price"?: number, "max_price"?: number }`.
pub async fn metadata<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<MetadataResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let id = ServiceId::new(id)?;
    let metadata = state.service_catalog.get_metadata(&id).await?;
    Ok(MetadataResponse::Ok(Json(metadata)))
}

/// `GET /api/services`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let services = state.service_catalog.list_services().await?;
    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /api/services/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let id = ServiceId::new(id)?;
    let service = state.service_catalog.get_service(&id).await?;
    Ok(GetResponse::Ok(Json(service)))
}

/// `POST /api/services`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateServiceRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let service = req.into_service()?;
    let created = state.service_catalog.create_service(service).await?;
    tracing::info!(service_id = %created.id, "service created");
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/services/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let id = ServiceId::new(id)?;
    state.service_catalog.delete_service(&id).await?;
    Ok(DeleteResponse::NoContent)
}
