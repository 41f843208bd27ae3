use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::services::storage::StorageError;
use crate::services::validation::{ValidationError, BODY_PATH};

/// Failure of an API call. Both kinds reach the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: Value,
}

/// Unreadable request bodies (bad JSON, wrong content type) are reported
/// like any other payload violation.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::single(BODY_PATH, rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Validation(err) => {
                tracing::info!(error = %err, "request rejected");
                metrics::counter!("validation_failures_total").increment(1);

                let mut by_path: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
                for violation in &err.violations {
                    by_path
                        .entry(violation.path.as_str())
                        .or_default()
                        .push(violation.message.as_str());
                }
                let fields: Map<String, Value> = by_path
                    .into_iter()
                    .map(|(path, errors)| (path.to_string(), json!({ "errors": errors })))
                    .collect();

                ErrorResponse {
                    error: "Validation failed".to_string(),
                    fields: Value::Object(fields),
                }
            }
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage operation failed");
                metrics::counter!("storage_errors_total").increment(1);

                ErrorResponse {
                    error: "Storage operation failed".to_string(),
                    fields: json!({ "message": err.to_string() }),
                }
            }
        };

        (self.status(), Json(body)).into_response()
    }
}
