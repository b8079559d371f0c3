use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

use super::extractors::{validate_page, PaginationParams};
use super::responses::{ok, validation_error, ApiResponse, ValidationErrorResponse};
use super::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::*;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.database.ping().await {
        Ok(()) => ok(HealthStatus {
            status: "healthy",
            database: "connected",
        })
        .into_response(),
        Err(e) => {
            warn!("Health check failed: {}", e);
            let details = HashMap::from([("database".to_string(), "unavailable".to_string())]);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error_with_details(
                    "Service unhealthy".to_string(),
                    details,
                )),
            )
                .into_response()
        }
    }
}

// Content API
pub async fn list_content(
    State(state): State<AppState>,
    filters: Result<Query<ContentFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<ContentPage>>, Response> {
    let Query(filters) = filters.map_err(|rejection| {
        validation_error(vec![ValidationErrorResponse {
            field: "query_string".to_string(),
            message: rejection.body_text(),
        }])
    })?;
    validate_page(filters.page, filters.limit).map_err(validation_error)?;

    let page = state
        .database
        .get_content(&filters)
        .await
        .map_err(|e| AppError::from(e).into_response())?;
    Ok(ok(page))
}

pub async fn get_content(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ContentDetails>>> {
    let Path(id) = id.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    match state.database.get_content_by_id(id).await? {
        Some(details) => Ok(ok(details)),
        None => Err(AppError::not_found("content", id.to_string())),
    }
}

// Dashboard API
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    Ok(ok(state.database.get_dashboard_stats().await?))
}

// Settings API
pub async fn get_site_settings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<SiteSetting>>>> {
    Ok(ok(state.database.get_site_settings().await?))
}

pub async fn update_site_settings(
    State(state): State<AppState>,
    updates: Result<Json<Vec<SettingUpdate>>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Vec<SiteSetting>>>> {
    let Json(updates) = updates.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    if updates.is_empty() {
        return Err(AppError::validation("At least one setting must be provided"));
    }

    let updated = state.database.update_site_settings(&updates).await?;
    info!("Settings update applied to {} keys", updated);

    Ok(ok(state.database.get_site_settings().await?))
}

// Users API
pub async fn list_users(
    State(state): State<AppState>,
    pagination: PaginationParams,
) -> AppResult<Json<ApiResponse<UserPage>>> {
    Ok(ok(state
        .database
        .get_users(pagination.into_pagination())
        .await?))
}

// Reference data API
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    Ok(ok(state.database.get_categories().await?))
}

pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Genre>>>> {
    Ok(ok(state.database.get_genres().await?))
}
