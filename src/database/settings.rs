use sqlx::Row;
use tracing::info;

use super::rows::site_setting_from_row;
use super::DatabaseManager;
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::*;
use crate::utils::datetime::DateTimeParser;

impl DatabaseManager {
    /// All active settings ordered by category, then key
    pub async fn get_site_settings(&self) -> RepositoryResult<Vec<SiteSetting>> {
        let pool = self.pool()?;

        sqlx::query(
            "SELECT id, setting_key, setting_value, setting_type, category, description, is_active, updated_at
             FROM site_settings
             WHERE is_active = 1
             ORDER BY category, setting_key",
        )
        .fetch_all(&pool)
        .await?
        .iter()
        .map(site_setting_from_row)
        .collect()
    }

    /// Overwrite each key's value and bump its `updated_at`.
    ///
    /// The whole batch runs in one transaction: an unknown key, a value that
    /// does not match the setting's type, or a driver error leaves every
    /// setting as it was.
    pub async fn update_site_settings(&self, updates: &[SettingUpdate]) -> RepositoryResult<usize> {
        let pool = self.pool()?;
        if updates.is_empty() {
            return Ok(0);
        }

        let updated_at = DateTimeParser::now_for_storage();
        let mut transaction = pool.begin().await?;

        for update in updates {
            let row = sqlx::query("SELECT setting_type FROM site_settings WHERE setting_key = ?")
                .bind(&update.key)
                .fetch_optional(&mut *transaction)
                .await?
                .ok_or_else(|| {
                    RepositoryError::record_not_found("site_settings", "setting_key", &update.key)
                })?;

            let setting_type: SettingType = row
                .try_get::<String, _>("setting_type")?
                .parse()
                .map_err(|message: String| RepositoryError::invalid_value("setting_type", message))?;

            setting_type.validate(&update.value).map_err(|message| {
                RepositoryError::validation(format!("{}: {}", update.key, message))
            })?;

            sqlx::query(
                "UPDATE site_settings SET setting_value = ?, updated_at = ? WHERE setting_key = ?",
            )
            .bind(&update.value)
            .bind(&updated_at)
            .bind(&update.key)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;

        info!(
            "Updated {} site settings: {}",
            updates.len(),
            updates
                .iter()
                .map(|u| u.key.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(updates.len())
    }
}
