//! HTTP response types and utilities
//!
//! Every endpoint answers with an [`ApiResponse`] envelope; errors are mapped
//! to status codes in one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

use crate::errors::{AppError, RepositoryError};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_with_details(message: String, details: HashMap<String, String>) -> Self {
        Self {
            details: Some(details),
            ..Self::error(message)
        }
    }
}

/// Wrap data in a successful envelope
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// Field level validation failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub field: String,
    pub message: String,
}

pub fn validation_error(errors: Vec<ValidationErrorResponse>) -> Response {
    let details = errors
        .into_iter()
        .map(|error| (error.field, error.message))
        .collect();

    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error_with_details(
            "Validation failed".to_string(),
            details,
        )),
    )
        .into_response()
}

/// Status and client-facing message for an error
fn status_and_message(error: &AppError) -> (StatusCode, String) {
    match error {
        AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{} with id '{}' not found", resource, id),
        ),
        AppError::Repository(repository_error) if repository_error.is_unavailable() => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Database is not available".to_string(),
        ),
        AppError::Repository(repository_error) => match repository_error {
            RepositoryError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            RepositoryError::RecordNotFound { table, field, value } => (
                StatusCode::NOT_FOUND,
                format!("No {} row with {} '{}'", table, field, value),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database operation failed".to_string(),
            ),
        },
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self);
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(ApiResponse::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_errors_map_to_service_unavailable() {
        let (status, _) = status_and_message(&AppError::Repository(RepositoryError::Closed));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) =
            status_and_message(&AppError::Repository(RepositoryError::NotInitialized));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_client_errors() {
        let (status, message) = status_and_message(&AppError::not_found("content", "42"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "content with id '42' not found");

        let (status, _) = status_and_message(&AppError::Repository(
            RepositoryError::record_not_found("site_settings", "setting_key", "nope"),
        ));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = status_and_message(&AppError::validation("bad"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::error("boom".to_string())).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "boom");
        assert!(body.get("data").is_none());
    }
}
