//! Catalog content and the rows hanging off it

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Pagination, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
    Program,
    Game,
    Application,
    Theater,
    Sports,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Series => "series",
            ContentType::Program => "program",
            ContentType::Game => "game",
            ContentType::Application => "application",
            ContentType::Theater => "theater",
            ContentType::Sports => "sports",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(ContentType::Movie),
            "series" => Ok(ContentType::Series),
            "program" => Ok(ContentType::Program),
            "game" => Ok(ContentType::Game),
            "application" => Ok(ContentType::Application),
            "theater" => Ok(ContentType::Theater),
            "sports" => Ok(ContentType::Sports),
            other => Err(format!("unknown content type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    pub release_date: Option<String>,
    pub rating: f64,
    pub duration: Option<i64>, // minutes
    pub view_count: i64,
    pub download_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: i64,
    pub content_id: i64,
    pub season_number: i64,
    pub episode_number: i64,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub release_date: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadLink {
    pub id: i64,
    pub content_id: i64,
    pub episode_id: Option<i64>,
    pub quality: String,
    pub size: Option<String>,
    pub url: String,
    pub server_name: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamingLink {
    pub id: i64,
    pub content_id: i64,
    pub episode_id: Option<i64>,
    pub quality: String,
    pub url: String,
    pub server_name: Option<String>,
    pub is_active: bool,
}

/// A content row with its category/genre names and every dependent row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDetails {
    #[serde(flatten)]
    pub content: Content,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub episodes: Vec<Episode>,
    pub download_links: Vec<DownloadLink>,
    pub streaming_links: Vec<StreamingLink>,
}

/// Columns a content listing may be ordered by
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Rating,
    ViewCount,
    DownloadCount,
    ReleaseDate,
}

impl ContentSortField {
    pub fn column(&self) -> &'static str {
        match self {
            ContentSortField::CreatedAt => "created_at",
            ContentSortField::UpdatedAt => "updated_at",
            ContentSortField::Title => "title",
            ContentSortField::Rating => "rating",
            ContentSortField::ViewCount => "view_count",
            ContentSortField::DownloadCount => "download_count",
            ContentSortField::ReleaseDate => "release_date",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Optional filters for listing active content
///
/// Also the query string shape of `GET /api/content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFilters {
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    /// Substring matched against `title` and `title_ar`, case-insensitive for ASCII letters
    pub query: Option<String>,
    pub featured: bool,
    pub trending: bool,
    pub category_id: Option<i64>,
    pub genre_id: Option<i64>,
    pub sort_by: ContentSortField,
    pub sort_order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for ContentFilters {
    fn default() -> Self {
        Self {
            content_type: None,
            query: None,
            featured: false,
            trending: false,
            category_id: None,
            genre_id: None,
            sort_by: ContentSortField::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ContentFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn genre(mut self, genre_id: i64) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    pub fn sort(mut self, sort_by: ContentSortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    /// Trimmed search text, `None` when blank
    pub fn search_text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    pub content: Vec<Content>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}
