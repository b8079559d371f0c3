use super::rows::{category_from_row, genre_from_row};
use super::DatabaseManager;
use crate::errors::RepositoryResult;
use crate::models::*;

impl DatabaseManager {
    pub async fn get_categories(&self) -> RepositoryResult<Vec<Category>> {
        let pool = self.pool()?;

        sqlx::query(
            "SELECT id, name, name_ar, slug, description, icon, color, sort_order, is_active
             FROM categories WHERE is_active = 1
             ORDER BY sort_order, name",
        )
        .fetch_all(&pool)
        .await?
        .iter()
        .map(category_from_row)
        .collect()
    }

    pub async fn get_genres(&self) -> RepositoryResult<Vec<Genre>> {
        let pool = self.pool()?;

        sqlx::query(
            "SELECT id, name, name_ar, slug, description, color, sort_order, is_active
             FROM genres WHERE is_active = 1
             ORDER BY sort_order, name",
        )
        .fetch_all(&pool)
        .await?
        .iter()
        .map(genre_from_row)
        .collect()
    }
}
