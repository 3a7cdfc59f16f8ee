//! HTTP handlers for the `/properties` resource
//!
//! Handlers only bind the request to a service call: shape validation happens
//! in the extractors, business rules in the service, and every error is
//! rendered by `AppError`.

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::PaginationConfig;
use crate::core::entity::{Property, PropertyInput};
use crate::core::error::{AppError, AppResult};
use crate::core::extractors::{AppPath, AppQuery};
use crate::core::mapper::to_property;
use crate::core::query::{Page, PropertyQuery};
use crate::core::service::PropertyService;
use crate::core::validation::ValidatedJson;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn PropertyService>,
    pub pagination: Arc<PaginationConfig>,
}

impl AppState {
    pub fn new(service: Arc<dyn PropertyService>, pagination: PaginationConfig) -> Self {
        Self {
            service,
            pagination: Arc::new(pagination),
        }
    }
}

/// `GET /properties`: filtered, paginated listing
pub async fn list_properties(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PropertyQuery>,
) -> AppResult<Json<Page<Property>>> {
    let filter = query.filter();
    let pageable = query.pageable(&state.pagination)?;
    let page = state
        .service
        .get_paginated_properties(&filter, &pageable)
        .await?;
    Ok(Json(page))
}

/// `GET /properties/{id}`
pub async fn get_property(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Property>> {
    Ok(Json(state.service.get_by_id(id).await?))
}

/// `POST /properties`
pub async fn create_property(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PropertyInput>,
) -> AppResult<Json<Property>> {
    let created = state.service.save(to_property(input)).await?;
    Ok(Json(created))
}

/// `PUT /properties/{id}`
pub async fn update_property(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    ValidatedJson(input): ValidatedJson<PropertyInput>,
) -> AppResult<Json<Property>> {
    let updated = state.service.update(id, to_property(input)).await?;
    Ok(Json(updated))
}

/// `DELETE /properties/{id}`
pub async fn delete_property(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "estate-rs"
    }))
}

/// Fallback for unknown routes
pub async fn route_not_found() -> AppError {
    AppError::not_found("No route matches the request")
}

/// Fallback for known routes called with an unsupported method
pub async fn method_not_supported(method: Method) -> AppError {
    AppError::bad_request(format!("Request method '{}' is not supported", method))
}
