//! SQLite persistence for the catalog and site settings
//!
//! [`DatabaseManager`] is constructed explicitly by the process entry point
//! and handed to whatever needs it. It moves through
//! `uninitialized -> initialized -> closed`; queries outside the initialized
//! state fail with [`RepositoryError::NotInitialized`] or
//! [`RepositoryError::Closed`].

use std::path::Path;
use std::sync::{Arc, RwLock};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqlitePool};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::config::{CatalogConfig, Config, DatabaseConfig, SeedConfig};
use crate::errors::{RepositoryError, RepositoryResult};

pub mod content;
pub mod dashboard;
pub mod reference;
mod rows;
pub mod seed;
pub mod settings;
pub mod users;

pub use seed::SeedReport;

/// Schema applied when no `database.schema_path` is configured
pub const BUNDLED_SCHEMA: &str = include_str!("../../migrations/schema.sql");

#[derive(Debug)]
enum ConnectionState {
    Uninitialized,
    Open(SqlitePool),
    Closed,
}

#[derive(Clone)]
pub struct DatabaseManager {
    config: DatabaseConfig,
    catalog: CatalogConfig,
    seed: SeedConfig,
    state: Arc<RwLock<ConnectionState>>,
    /// Serializes `initialize` and `close`
    lifecycle: Arc<Mutex<()>>,
}

impl DatabaseManager {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            config.database.clone(),
            config.catalog.clone(),
            config.seed.clone(),
        )
    }

    pub fn with_parts(database: DatabaseConfig, catalog: CatalogConfig, seed: SeedConfig) -> Self {
        Self {
            config: database,
            catalog,
            seed,
            state: Arc::new(RwLock::new(ConnectionState::Uninitialized)),
            lifecycle: Arc::new(Mutex::new(())),
        }
    }

    pub fn catalog_config(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.read_state(), ConnectionState::Open(_))
    }

    /// The open pool, or the lifecycle error explaining why there is none
    pub fn pool(&self) -> RepositoryResult<Pool<Sqlite>> {
        match &*self.read_state() {
            ConnectionState::Open(pool) => Ok(pool.clone()),
            ConnectionState::Uninitialized => Err(RepositoryError::NotInitialized),
            ConnectionState::Closed => Err(RepositoryError::Closed),
        }
    }

    /// Open the database file, apply the schema and seed it.
    ///
    /// Safe to run against an already seeded file: every seed insert is
    /// insert-or-ignore. Calling it on an open manager re-applies schema and
    /// seed on the existing connection. A freshly opened connection only
    /// becomes visible to queries once schema and seed have succeeded; on
    /// failure it is closed and the lifecycle state is left unchanged.
    pub async fn initialize(&self) -> RepositoryResult<SeedReport> {
        let _lifecycle = self.lifecycle.lock().await;

        if let Ok(pool) = self.pool() {
            return self.prepare(&pool).await;
        }

        let pool = self.open().await.inspect_err(|e| {
            error!("Failed to open database {}: {}", self.config.path.display(), e);
        })?;

        match self.prepare(&pool).await {
            Ok(report) => {
                *self.write_state() = ConnectionState::Open(pool);
                Ok(report)
            }
            Err(e) => {
                pool.close().await;
                Err(e)
            }
        }
    }

    /// Release the connection; later queries fail with `RepositoryError::Closed`
    pub async fn close(&self) {
        let _lifecycle = self.lifecycle.lock().await;

        let previous = std::mem::replace(&mut *self.write_state(), ConnectionState::Closed);
        if let ConnectionState::Open(pool) = previous {
            pool.close().await;
            info!("Database connection closed");
        }
    }

    /// Round trip to the database, used by health checks
    pub async fn ping(&self) -> RepositoryResult<()> {
        let pool = self.pool()?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }

    async fn open(&self) -> RepositoryResult<SqlitePool> {
        let path = &self.config.path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| RepositoryError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.config.max_connections.unwrap_or(1).max(1))
            .connect_with(options)
            .await?;

        debug!("Opened SQLite database at {}", path.display());
        Ok(pool)
    }

    async fn prepare(&self, pool: &SqlitePool) -> RepositoryResult<SeedReport> {
        self.apply_schema(pool).await.inspect_err(|e| {
            error!("Failed to apply schema: {}", e);
        })?;

        let report = self.run_seed(pool).await.inspect_err(|e| {
            error!("Failed to seed database: {}", e);
        })?;

        info!(
            "Database initialized at {} ({} seed rows inserted)",
            self.config.path.display(),
            report.total_inserted()
        );
        Ok(report)
    }

    async fn apply_schema(&self, pool: &SqlitePool) -> RepositoryResult<()> {
        let (origin, script) = match &self.config.schema_path {
            Some(schema_path) => (
                schema_path.display().to_string(),
                read_schema_file(schema_path).await?,
            ),
            None => ("bundled schema".to_string(), BUNDLED_SCHEMA.to_string()),
        };

        let start = std::time::Instant::now();
        sqlx::query(&script)
            .execute(pool)
            .await
            .map_err(|e| RepositoryError::schema(origin.clone(), e.to_string()))?;

        info!(
            "Applied schema from {} ({}ms)",
            origin,
            start.elapsed().as_millis()
        );
        Ok(())
    }

    async fn run_seed(&self, pool: &SqlitePool) -> RepositoryResult<SeedReport> {
        let mut transaction = pool.begin().await?;
        let report = seed::seed_all(&mut *transaction, &self.seed).await?;
        transaction.commit().await?;

        for (table, inserted) in &report.tables {
            if *inserted > 0 {
                debug!("Seeded {} new rows into {}", inserted, table);
            }
        }
        Ok(report)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ConnectionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, ConnectionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

async fn read_schema_file(path: &Path) -> RepositoryResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })
}
