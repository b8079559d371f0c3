use sqlx::{Row, SqlitePool};

use super::rows::{content_from_row, CONTENT_COLUMNS};
use super::DatabaseManager;
use crate::errors::RepositoryResult;
use crate::models::*;

impl DatabaseManager {
    /// Aggregate counters plus the recent, top rated and most viewed lists.
    ///
    /// `system_health` is a fixed placeholder.
    pub async fn get_dashboard_stats(&self) -> RepositoryResult<DashboardStats> {
        let pool = self.pool()?;

        let row = sqlx::query(
            "SELECT
                (SELECT COUNT(*) FROM content WHERE is_active = 1) AS total_content,
                (SELECT COUNT(*) FROM content WHERE is_active = 1 AND type = 'movie') AS total_movies,
                (SELECT COUNT(*) FROM content WHERE is_active = 1 AND type = 'series') AS total_series,
                (SELECT COUNT(*) FROM episodes) AS total_episodes,
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM users WHERE is_active = 1) AS active_users,
                (SELECT COUNT(*) FROM categories WHERE is_active = 1) AS total_categories,
                (SELECT COALESCE(SUM(view_count), 0) FROM content WHERE is_active = 1) AS total_views,
                (SELECT COALESCE(SUM(download_count), 0) FROM content WHERE is_active = 1) AS total_downloads,
                (SELECT COALESCE(AVG(rating), 0.0) FROM content WHERE is_active = 1) AS average_rating",
        )
        .fetch_one(&pool)
        .await?;

        let totals = DashboardTotals {
            content: row.try_get("total_content")?,
            movies: row.try_get("total_movies")?,
            series: row.try_get("total_series")?,
            episodes: row.try_get("total_episodes")?,
            users: row.try_get("total_users")?,
            active_users: row.try_get("active_users")?,
            categories: row.try_get("total_categories")?,
            views: row.try_get("total_views")?,
            downloads: row.try_get("total_downloads")?,
            average_rating: row.try_get("average_rating")?,
        };

        Ok(DashboardStats {
            totals,
            recent_content: top_content(&pool, "c.created_at DESC, c.id DESC").await?,
            top_rated: top_content(&pool, "c.rating DESC, c.view_count DESC, c.id").await?,
            most_viewed: top_content(&pool, "c.view_count DESC, c.id").await?,
            system_health: SystemHealth::healthy(),
        })
    }
}

async fn top_content(pool: &SqlitePool, order_by: &str) -> RepositoryResult<Vec<Content>> {
    sqlx::query(&format!(
        "SELECT {} FROM content c WHERE c.is_active = 1 ORDER BY {} LIMIT ?",
        CONTENT_COLUMNS, order_by
    ))
    .bind(DASHBOARD_LIST_SIZE)
    .fetch_all(pool)
    .await?
    .iter()
    .map(content_from_row)
    .collect()
}
