//! Web layer module
//!
//! Thin JSON handlers over [`DatabaseManager`]. The manager is created and
//! initialized by the caller and shared through [`AppState`]; the web layer
//! never opens or closes it.

use anyhow::Result;
use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, database::DatabaseManager};

pub mod api;
pub mod extractors;
pub mod responses;

pub use extractors::PaginationParams;
pub use responses::ApiResponse;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, database: DatabaseManager) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState { database });

        Ok(Self { app, addr })
    }

    /// Serve until `shutdown` resolves
    pub async fn serve(self, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Content
        .route("/content", get(api::list_content))
        .route("/content/:id", get(api::get_content))
        // Dashboard
        .route("/dashboard/stats", get(api::get_dashboard_stats))
        // Settings
        .route(
            "/settings",
            get(api::get_site_settings).put(api::update_site_settings),
        )
        // Users
        .route("/users", get(api::list_users))
        // Reference data
        .route("/categories", get(api::list_categories))
        .route("/genres", get(api::list_genres))
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseManager,
}
