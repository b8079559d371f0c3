use super::rows::user_summary_from_row;
use super::DatabaseManager;
use crate::errors::RepositoryResult;
use crate::models::*;

impl DatabaseManager {
    /// Page of users, active or not, newest first. The password hash is never selected.
    pub async fn get_users(&self, pagination: Pagination) -> RepositoryResult<UserPage> {
        let pool = self.pool()?;
        let mut transaction = pool.begin().await?;

        let users = sqlx::query(
            "SELECT id, username, email, first_name, last_name, avatar, role, is_active, last_login, created_at
             FROM users
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(i64::from(pagination.limit))
        .bind(pagination.offset())
        .fetch_all(&mut *transaction)
        .await?
        .iter()
        .map(user_summary_from_row)
        .collect::<RepositoryResult<Vec<_>>>()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(UserPage {
            users,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: pagination.total_pages(total),
        })
    }
}
