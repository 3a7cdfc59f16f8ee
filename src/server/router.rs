//! Router assembly
//!
//! Routes:
//! - GET    /health
//! - GET    /properties            - filtered, paginated list
//! - POST   /properties            - create
//! - GET    /properties/{id}       - fetch one
//! - PUT    /properties/{id}       - full replacement
//! - DELETE /properties/{id}       - delete
//!
//! Unknown routes, unsupported methods and handler panics are rendered as
//! problem bodies, like any other error.

use super::handlers::{
    AppState, create_property, delete_property, get_property, health_check, list_properties,
    method_not_supported, route_not_found, update_property,
};
use crate::core::error::{ErrorCode, ProblemDetail};
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the property routes over `state`
pub fn build_property_routes(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route(
            "/properties/{id}",
            get(get_property).put(update_property).delete(delete_property),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Attach the fallbacks, tracing, CORS and panic handling to `app`
///
/// Must run after every route is added: the method fallback only reaches
/// routes already registered.
pub fn with_middleware(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    app.fallback(route_not_found)
        .method_not_allowed_fallback(method_not_supported)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

/// Last-resort handler: a panicking handler becomes a 500 problem body
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "handler panicked");
    ProblemDetail::new(ErrorCode::InternalError, detail).into_response()
}
