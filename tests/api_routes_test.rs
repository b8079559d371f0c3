mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_store::database::DatabaseManager;
use catalog_store::web::{create_router, AppState};

use common::seeded_database;

// Helper function to send requests to the app
async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder().method(method).uri(uri);

    let request = if let Some(body) = body {
        request_builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

async fn test_app() -> (tempfile::TempDir, DatabaseManager, Router) {
    let (dir, database) = seeded_database().await;
    let app = create_router(AppState {
        database: database.clone(),
    });
    (dir, database, app)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) = send_request(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["status"], "healthy");
    assert!(response.get("timestamp").is_some());
}

#[tokio::test]
async fn test_list_content_with_filters() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) =
        send_request(&app, Method::GET, "/api/content?type=series", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["total"], 2);
    assert_eq!(response["data"]["total_pages"], 1);
    let items = response["data"]["content"].as_array().unwrap();
    assert!(items.iter().all(|item| item["type"] == "series"));

    let (status, response) = send_request(
        &app,
        Method::GET,
        "/api/content?featured=true&sort_by=rating&sort_order=asc&page=1&limit=2",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["total"], 3);
    assert_eq!(response["data"]["content"].as_array().unwrap().len(), 2);
    assert_eq!(response["data"]["content"][0]["title"], "Sky Racer");
}

#[tokio::test]
async fn test_list_content_rejects_invalid_pagination() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) = send_request(&app, Method::GET, "/api/content?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);

    let (status, _) = send_request(&app, Method::GET, "/api/users?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_requests_use_error_envelope() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) =
        send_request(&app, Method::GET, "/api/content?type=podcast", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert_eq!(response["error"], "Validation failed");
    assert!(response["details"]["query_string"]
        .as_str()
        .unwrap()
        .contains("podcast"));

    let (status, response) = send_request(&app, Method::GET, "/api/content/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert!(response["error"].is_string());

    let (status, response) = send_request(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!({ "key": "site_name" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn test_content_details_and_not_found() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) = send_request(&app, Method::GET, "/api/content/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["title"], "Crown of Sand");
    assert_eq!(response["data"]["episodes"].as_array().unwrap().len(), 6);
    assert_eq!(response["data"]["download_links"].as_array().unwrap().len(), 2);

    let (status, response) = send_request(&app, Method::GET, "/api/content/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn test_update_settings() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) = send_request(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!([
            { "key": "site_name", "value": "Cinema Vault" },
            { "key": "maintenance_mode", "value": "true" }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let settings = response["data"].as_array().unwrap();
    let site_name = settings
        .iter()
        .find(|s| s["key"] == "site_name")
        .unwrap();
    assert_eq!(site_name["value"], "Cinema Vault");

    let (status, _) = send_request(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!([{ "key": "unknown_key", "value": "x" }])),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_request(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!([{ "key": "items_per_page", "value": "many" }])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_request(&app, Method::PUT, "/api/settings", Some(json!([]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_dashboard_and_reference_routes() {
    let (_dir, _database, app) = test_app().await;

    let (status, response) = send_request(&app, Method::GET, "/api/users?page=1&limit=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["total"], 4);
    assert_eq!(response["data"]["users"].as_array().unwrap().len(), 3);
    assert!(response["data"]["users"][0].get("password_hash").is_none());

    let (status, response) = send_request(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["totals"]["content"], 8);
    assert_eq!(response["data"]["system_health"]["status"], "healthy");

    let (status, response) = send_request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"].as_array().unwrap().len(), 8);

    let (status, response) = send_request(&app, Method::GET, "/api/genres", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_closed_database_reports_unavailable() {
    let (_dir, database, app) = test_app().await;
    database.close().await;

    let (status, response) = send_request(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response["success"], false);
    assert_eq!(response["details"]["database"], "unavailable");
    assert!(response.get("data").is_none());

    let (status, response) = send_request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response["success"], false);
}
