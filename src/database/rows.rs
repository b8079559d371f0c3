//! Row mapping helpers for SQLite text-backed columns
//!
//! Timestamps and enum-like columns are stored as TEXT; these helpers decode
//! them with errors instead of panics so a bad row surfaces as a
//! `RepositoryError::InvalidValue`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::*;
use crate::utils::datetime::DateTimeParser;

/// Column list for `content` rows aliased as `c`, in the order `content_from_row` reads them
pub(crate) const CONTENT_COLUMNS: &str = "c.id, c.title, c.title_ar, c.description, c.description_ar, \
     c.type, c.poster, c.backdrop, c.release_date, c.rating, c.duration, c.view_count, \
     c.download_count, c.is_active, c.created_at, c.updated_at";

/// Typed access to TEXT encoded values in a SQLite row
pub(crate) trait SqliteRowExt {
    /// Get a datetime column stored as text
    fn get_datetime(&self, column: &str) -> RepositoryResult<DateTime<Utc>>;

    /// Get a nullable datetime column stored as text
    fn get_datetime_opt(&self, column: &str) -> RepositoryResult<Option<DateTime<Utc>>>;

    /// Get a text column parsed through `FromStr`
    fn get_parsed<T: FromStr<Err = String>>(&self, column: &str) -> RepositoryResult<T>;
}

impl SqliteRowExt for SqliteRow {
    fn get_datetime(&self, column: &str) -> RepositoryResult<DateTime<Utc>> {
        let datetime_str: String = self.try_get(column)?;
        DateTimeParser::parse_flexible(&datetime_str)
            .map_err(|e| RepositoryError::invalid_value(column, e.to_string()))
    }

    fn get_datetime_opt(&self, column: &str) -> RepositoryResult<Option<DateTime<Utc>>> {
        let datetime_str: Option<String> = self.try_get(column)?;
        datetime_str
            .map(|s| {
                DateTimeParser::parse_flexible(&s)
                    .map_err(|e| RepositoryError::invalid_value(column, e.to_string()))
            })
            .transpose()
    }

    fn get_parsed<T: FromStr<Err = String>>(&self, column: &str) -> RepositoryResult<T> {
        let raw: String = self.try_get(column)?;
        raw.parse()
            .map_err(|message: String| RepositoryError::invalid_value(column, message))
    }
}

pub(crate) fn content_from_row(row: &SqliteRow) -> RepositoryResult<Content> {
    Ok(Content {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        title_ar: row.try_get("title_ar")?,
        description: row.try_get("description")?,
        description_ar: row.try_get("description_ar")?,
        content_type: row.get_parsed("type")?,
        poster: row.try_get("poster")?,
        backdrop: row.try_get("backdrop")?,
        release_date: row.try_get("release_date")?,
        rating: row.try_get("rating")?,
        duration: row.try_get("duration")?,
        view_count: row.try_get("view_count")?,
        download_count: row.try_get("download_count")?,
        is_active: row.try_get("is_active")?,
        created_at: row.get_datetime("created_at")?,
        updated_at: row.get_datetime("updated_at")?,
    })
}

pub(crate) fn episode_from_row(row: &SqliteRow) -> RepositoryResult<Episode> {
    Ok(Episode {
        id: row.try_get("id")?,
        content_id: row.try_get("content_id")?,
        season_number: row.try_get("season_number")?,
        episode_number: row.try_get("episode_number")?,
        title: row.try_get("title")?,
        title_ar: row.try_get("title_ar")?,
        description: row.try_get("description")?,
        duration: row.try_get("duration")?,
        release_date: row.try_get("release_date")?,
        is_active: row.try_get("is_active")?,
        created_at: row.get_datetime("created_at")?,
    })
}

pub(crate) fn download_link_from_row(row: &SqliteRow) -> RepositoryResult<DownloadLink> {
    Ok(DownloadLink {
        id: row.try_get("id")?,
        content_id: row.try_get("content_id")?,
        episode_id: row.try_get("episode_id")?,
        quality: row.try_get("quality")?,
        size: row.try_get("size")?,
        url: row.try_get("url")?,
        server_name: row.try_get("server_name")?,
        is_active: row.try_get("is_active")?,
    })
}

pub(crate) fn streaming_link_from_row(row: &SqliteRow) -> RepositoryResult<StreamingLink> {
    Ok(StreamingLink {
        id: row.try_get("id")?,
        content_id: row.try_get("content_id")?,
        episode_id: row.try_get("episode_id")?,
        quality: row.try_get("quality")?,
        url: row.try_get("url")?,
        server_name: row.try_get("server_name")?,
        is_active: row.try_get("is_active")?,
    })
}

pub(crate) fn site_setting_from_row(row: &SqliteRow) -> RepositoryResult<SiteSetting> {
    Ok(SiteSetting {
        id: row.try_get("id")?,
        key: row.try_get("setting_key")?,
        value: row.try_get("setting_value")?,
        setting_type: row.get_parsed("setting_type")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
        is_active: row.try_get("is_active")?,
        updated_at: row.get_datetime("updated_at")?,
    })
}

pub(crate) fn user_summary_from_row(row: &SqliteRow) -> RepositoryResult<UserSummary> {
    Ok(UserSummary {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        avatar: row.try_get("avatar")?,
        role: row.get_parsed("role")?,
        is_active: row.try_get("is_active")?,
        last_login: row.get_datetime_opt("last_login")?,
        created_at: row.get_datetime("created_at")?,
    })
}

pub(crate) fn category_from_row(row: &SqliteRow) -> RepositoryResult<Category> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        name_ar: row.try_get("name_ar")?,
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
        icon: row.try_get("icon")?,
        color: row.try_get("color")?,
        sort_order: row.try_get("sort_order")?,
        is_active: row.try_get("is_active")?,
    })
}

pub(crate) fn genre_from_row(row: &SqliteRow) -> RepositoryResult<Genre> {
    Ok(Genre {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        name_ar: row.try_get("name_ar")?,
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
        color: row.try_get("color")?,
        sort_order: row.try_get("sort_order")?,
        is_active: row.try_get("is_active")?,
    })
}

/// Unit separator used to join names in `GROUP_CONCAT`; names may contain commas
pub(crate) const NAME_SEPARATOR: char = '\u{1f}';

/// SQL expression producing [`NAME_SEPARATOR`]
pub(crate) const NAME_SEPARATOR_SQL: &str = "char(31)";

/// Split a `GROUP_CONCAT` result into sorted names
pub(crate) fn split_concat(value: Option<String>) -> Vec<String> {
    let mut names: Vec<String> = value
        .unwrap_or_default()
        .split(NAME_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_concat() {
        assert!(split_concat(None).is_empty());
        assert!(split_concat(Some(String::new())).is_empty());
        assert_eq!(
            split_concat(Some("Thriller\u{1f}Drama".to_string())),
            vec!["Drama".to_string(), "Thriller".to_string()]
        );
        assert_eq!(
            split_concat(Some("Stand-up, Live\u{1f}Comedy".to_string())),
            vec!["Comedy".to_string(), "Stand-up, Live".to_string()]
        );
    }
}
