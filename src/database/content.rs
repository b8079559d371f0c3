//! Content listing and detail queries

use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::debug;

use super::rows::{
    content_from_row, download_link_from_row, episode_from_row, split_concat,
    streaming_link_from_row, CONTENT_COLUMNS, NAME_SEPARATOR_SQL,
};
use super::DatabaseManager;
use crate::config::CatalogConfig;
use crate::errors::RepositoryResult;
use crate::models::*;

impl DatabaseManager {
    /// Page of active content matching `filters`, with the total match count.
    ///
    /// Page and count are built from the same predicate and read inside one
    /// transaction, so `total` always agrees with the rows returned.
    pub async fn get_content(&self, filters: &ContentFilters) -> RepositoryResult<ContentPage> {
        let pool = self.pool()?;
        let pagination = filters.pagination();
        let mut transaction = pool.begin().await?;

        let mut page_query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {} FROM content c",
            CONTENT_COLUMNS
        ));
        push_content_predicate(&mut page_query, filters, self.catalog_config());
        let direction = filters.sort_order.as_sql();
        page_query.push(format!(
            " ORDER BY c.{} {}, c.id {}",
            filters.sort_by.column(),
            direction,
            direction
        ));
        page_query
            .push(" LIMIT ")
            .push_bind(i64::from(pagination.limit))
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        debug!("Content page query: {}", page_query.sql());
        let rows = page_query.build().fetch_all(&mut *transaction).await?;

        let mut count_query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM content c");
        push_content_predicate(&mut count_query, filters, self.catalog_config());
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&mut *transaction)
            .await?;

        transaction.commit().await?;

        let content = rows
            .iter()
            .map(content_from_row)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(ContentPage {
            content,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: pagination.total_pages(total),
        })
    }

    /// One content row, active or not, with categories, genres, episodes and links.
    pub async fn get_content_by_id(&self, id: i64) -> RepositoryResult<Option<ContentDetails>> {
        let pool = self.pool()?;

        let row = sqlx::query(&format!(
            "SELECT {columns},
                    (SELECT GROUP_CONCAT(cat.name, {separator})
                     FROM content_categories cc
                     JOIN categories cat ON cat.id = cc.category_id
                     WHERE cc.content_id = c.id) AS category_names,
                    (SELECT GROUP_CONCAT(g.name, {separator})
                     FROM content_genres cg
                     JOIN genres g ON g.id = cg.genre_id
                     WHERE cg.content_id = c.id) AS genre_names
             FROM content c
             WHERE c.id = ?",
            columns = CONTENT_COLUMNS,
            separator = NAME_SEPARATOR_SQL,
        ))
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let content = content_from_row(&row)?;
        let categories = split_concat(row.try_get("category_names")?);
        let genres = split_concat(row.try_get("genre_names")?);

        let episodes = sqlx::query(
            "SELECT id, content_id, season_number, episode_number, title, title_ar, description,
             duration, release_date, is_active, created_at
             FROM episodes WHERE content_id = ?
             ORDER BY season_number, episode_number",
        )
        .bind(id)
        .fetch_all(&pool)
        .await?
        .iter()
        .map(episode_from_row)
        .collect::<RepositoryResult<Vec<_>>>()?;

        let download_links = sqlx::query(
            "SELECT id, content_id, episode_id, quality, size, url, server_name, is_active
             FROM download_links WHERE content_id = ?
             ORDER BY episode_id, quality DESC, id",
        )
        .bind(id)
        .fetch_all(&pool)
        .await?
        .iter()
        .map(download_link_from_row)
        .collect::<RepositoryResult<Vec<_>>>()?;

        let streaming_links = sqlx::query(
            "SELECT id, content_id, episode_id, quality, url, server_name, is_active
             FROM streaming_links WHERE content_id = ?
             ORDER BY episode_id, quality DESC, id",
        )
        .bind(id)
        .fetch_all(&pool)
        .await?
        .iter()
        .map(streaming_link_from_row)
        .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Some(ContentDetails {
            content,
            categories,
            genres,
            episodes,
            download_links,
            streaming_links,
        }))
    }
}

/// Append the `WHERE` clause for a content listing.
///
/// Shared by the page query and the count query so the two cannot drift.
pub(crate) fn push_content_predicate(
    builder: &mut QueryBuilder<'_, Sqlite>,
    filters: &ContentFilters,
    catalog: &CatalogConfig,
) {
    builder.push(" WHERE c.is_active = 1");

    if let Some(content_type) = filters.content_type {
        builder.push(" AND c.type = ").push_bind(content_type.as_str());
    }

    // SQLite LIKE folds case for ASCII letters only; "école" does not match "École".
    if let Some(search) = filters.search_text() {
        let pattern = format!("%{}%", escape_like(search));
        builder
            .push(" AND (c.title LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR c.title_ar LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }

    if filters.featured {
        builder
            .push(" AND c.rating >= ")
            .push_bind(catalog.featured_min_rating);
    }

    if filters.trending {
        builder
            .push(" AND c.view_count >= ")
            .push_bind(catalog.trending_min_views);
    }

    if let Some(category_id) = filters.category_id {
        builder
            .push(" AND EXISTS (SELECT 1 FROM content_categories cc WHERE cc.content_id = c.id AND cc.category_id = ")
            .push_bind(category_id)
            .push(")");
    }

    if let Some(genre_id) = filters.genre_id {
        builder
            .push(" AND EXISTS (SELECT 1 FROM content_genres cg WHERE cg.content_id = c.id AND cg.genre_id = ")
            .push_bind(genre_id)
            .push(")");
    }
}

/// Escape LIKE wildcards so user text matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate_sql(filters: &ContentFilters) -> String {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM content c");
        push_content_predicate(&mut builder, filters, &CatalogConfig::default());
        builder.sql().to_string()
    }

    #[test]
    fn test_no_filters_only_restricts_to_active() {
        assert_eq!(
            predicate_sql(&ContentFilters::default()),
            "SELECT COUNT(*) FROM content c WHERE c.is_active = 1"
        );
    }

    #[test]
    fn test_filters_compose_with_and() {
        let sql = predicate_sql(
            &ContentFilters::new()
                .content_type(ContentType::Movie)
                .query("dune")
                .featured()
                .trending(),
        );

        assert!(sql.contains("c.type = ?"));
        assert!(sql.contains("(c.title LIKE ? ESCAPE '\\' OR c.title_ar LIKE ? ESCAPE '\\')"));
        assert!(sql.contains("c.rating >= ?"));
        assert!(sql.contains("c.view_count >= ?"));
        assert_eq!(sql.matches(" AND ").count(), 4);
        assert!(!sql.contains("dune"));
    }

    #[test]
    fn test_category_and_genre_use_subqueries() {
        let sql = predicate_sql(&ContentFilters::new().category(2).genre(7));
        assert!(sql.contains("FROM content_categories cc WHERE cc.content_id = c.id AND cc.category_id = ?"));
        assert!(sql.contains("FROM content_genres cg WHERE cg.content_id = c.id AND cg.genre_id = ?"));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
