#![allow(dead_code)]

use catalog_store::config::Config;
use catalog_store::database::DatabaseManager;
use tempfile::TempDir;

/// Config pointing at a database file inside a fresh temporary directory
pub fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.database.path = dir.path().join("serverdata").join("database.db");
    config
}

/// Initialized manager over a freshly seeded database. Keep the `TempDir` alive for the test.
pub async fn seeded_database() -> (TempDir, DatabaseManager) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let database = DatabaseManager::new(&test_config(&dir));
    database.initialize().await.expect("initialize database");
    (dir, database)
}

pub async fn count_rows(database: &DatabaseManager, table: &str) -> i64 {
    let pool = database.pool().expect("open pool");
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&pool)
        .await
        .expect("count rows")
}
