//! Request extractors and validation

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::responses::{validation_error, ApiResponse, ValidationErrorResponse};
use crate::models::{Pagination, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

/// Pagination parameters from query string
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    /// Validate pagination parameters
    pub fn validate(&self) -> Result<(), Vec<ValidationErrorResponse>> {
        validate_page(self.page, self.limit)
    }

    pub fn into_pagination(self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}

pub fn validate_page(page: u32, limit: u32) -> Result<(), Vec<ValidationErrorResponse>> {
    let mut errors = Vec::new();

    if page < 1 {
        errors.push(ValidationErrorResponse {
            field: "page".to_string(),
            message: "Page must be >= 1".to_string(),
        });
    }

    if limit < 1 || limit > MAX_PAGE_LIMIT {
        errors.push(ValidationErrorResponse {
            field: "limit".to_string(),
            message: format!("Limit must be between 1 and {}", MAX_PAGE_LIMIT),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PaginationParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error("Invalid pagination parameters".to_string())),
                )
                    .into_response()
            })?;

        params.validate().map_err(validation_error)?;

        Ok(params)
    }
}
