//! Axum extractor for validated request bodies
//!
//! `ValidatedJson<T>` parses the body as JSON, runs `T::rules()` against the
//! raw value and only then deserializes into `T`. Every rejection is an
//! [`AppError`], so it is rendered like any other error.

use super::ValidatedInput;
use crate::core::error::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Axum extractor that validates a JSON body before deserializing it
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_property(
///     ValidatedJson(input): ValidatedJson<PropertyInput>,
/// ) -> AppResult<Json<Property>> {
///     // input already passed its field rules
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: ValidatedInput,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        let errors = T::rules().validate(&payload);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "request body failed validation");
            return Err(AppError::Validation(errors));
        }

        serde_json::from_value(payload)
            .map(ValidatedJson)
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {}", e)))
    }
}
