//! Reference and demo rows inserted at startup.
//!
//! Every statement is `INSERT OR IGNORE` against an explicit id or a unique
//! column, so running the seed again leaves existing rows untouched and
//! inserts nothing new.

use sqlx::SqliteConnection;

use crate::config::SeedConfig;
use crate::errors::{RepositoryError, RepositoryResult};
use crate::utils::hashing::hash_password;

/// Rows inserted per table during one seed run
#[derive(Debug, Default, Clone)]
pub struct SeedReport {
    pub tables: Vec<(&'static str, u64)>,
}

impl SeedReport {
    pub fn total_inserted(&self) -> u64 {
        self.tables.iter().map(|(_, inserted)| inserted).sum()
    }

    pub fn inserted(&self, table: &str) -> u64 {
        self.tables
            .iter()
            .filter(|(name, _)| *name == table)
            .map(|(_, inserted)| inserted)
            .sum()
    }

    fn record(&mut self, table: &'static str, inserted: u64) {
        self.tables.push((table, inserted));
    }
}

struct CategoryRow {
    id: i64,
    name: &'static str,
    name_ar: &'static str,
    slug: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

#[rustfmt::skip]
const CATEGORIES: &[CategoryRow] = &[
    CategoryRow { id: 1, name: "Movies", name_ar: "أفلام", slug: "movies", description: "Feature films", icon: "film", color: "#e50914" },
    CategoryRow { id: 2, name: "Series", name_ar: "مسلسلات", slug: "series", description: "Episodic series", icon: "tv", color: "#1f80e0" },
    CategoryRow { id: 3, name: "Programs", name_ar: "برامج", slug: "programs", description: "TV programs and shows", icon: "mic", color: "#8e44ad" },
    CategoryRow { id: 4, name: "Games", name_ar: "ألعاب", slug: "games", description: "Games", icon: "gamepad", color: "#27ae60" },
    CategoryRow { id: 5, name: "Applications", name_ar: "تطبيقات", slug: "applications", description: "Applications", icon: "smartphone", color: "#f39c12" },
    CategoryRow { id: 6, name: "Theater", name_ar: "مسرحيات", slug: "theater", description: "Recorded plays", icon: "drama", color: "#c0392b" },
    CategoryRow { id: 7, name: "Sports", name_ar: "رياضة", slug: "sports", description: "Sports events", icon: "trophy", color: "#16a085" },
    CategoryRow { id: 8, name: "Kids", name_ar: "أطفال", slug: "kids", description: "Family and kids", icon: "smile", color: "#e67e22" },
];

struct GenreRow {
    id: i64,
    name: &'static str,
    name_ar: &'static str,
    slug: &'static str,
    color: &'static str,
}

#[rustfmt::skip]
const GENRES: &[GenreRow] = &[
    GenreRow { id: 1, name: "Action", name_ar: "أكشن", slug: "action", color: "#e74c3c" },
    GenreRow { id: 2, name: "Comedy", name_ar: "كوميديا", slug: "comedy", color: "#f1c40f" },
    GenreRow { id: 3, name: "Drama", name_ar: "دراما", slug: "drama", color: "#9b59b6" },
    GenreRow { id: 4, name: "Horror", name_ar: "رعب", slug: "horror", color: "#2c3e50" },
    GenreRow { id: 5, name: "Romance", name_ar: "رومانسي", slug: "romance", color: "#e84393" },
    GenreRow { id: 6, name: "Sci-Fi", name_ar: "خيال علمي", slug: "sci-fi", color: "#00cec9" },
    GenreRow { id: 7, name: "Thriller", name_ar: "إثارة", slug: "thriller", color: "#636e72" },
    GenreRow { id: 8, name: "Animation", name_ar: "رسوم متحركة", slug: "animation", color: "#fd79a8" },
    GenreRow { id: 9, name: "Documentary", name_ar: "وثائقي", slug: "documentary", color: "#00b894" },
    GenreRow { id: 10, name: "Adventure", name_ar: "مغامرة", slug: "adventure", color: "#e17055" },
];

struct SettingRow {
    key: &'static str,
    value: &'static str,
    setting_type: &'static str,
    category: &'static str,
    description: &'static str,
}

#[rustfmt::skip]
const SITE_SETTINGS: &[SettingRow] = &[
    // General
    SettingRow { key: "site_name", value: "Streaming Hub", setting_type: "string", category: "general", description: "Site name shown in headers and titles" },
    SettingRow { key: "site_description", value: "Movies, series and more", setting_type: "string", category: "general", description: "Short description of the site" },
    SettingRow { key: "site_language", value: "ar", setting_type: "string", category: "general", description: "Default interface language" },
    SettingRow { key: "maintenance_mode", value: "false", setting_type: "boolean", category: "general", description: "Serve the maintenance page to visitors" },
    SettingRow { key: "items_per_page", value: "20", setting_type: "number", category: "general", description: "Default page size for listings" },
    // Appearance
    SettingRow { key: "primary_color", value: "#e50914", setting_type: "string", category: "appearance", description: "Primary brand color" },
    SettingRow { key: "theme", value: "dark", setting_type: "string", category: "appearance", description: "Default theme" },
    SettingRow { key: "logo_url", value: "/images/logo.png", setting_type: "string", category: "appearance", description: "Logo location" },
    // Content
    SettingRow { key: "allow_downloads", value: "true", setting_type: "boolean", category: "content", description: "Expose download links to visitors" },
    SettingRow { key: "default_quality", value: "1080p", setting_type: "string", category: "content", description: "Default streaming quality" },
    SettingRow { key: "auto_play_next", value: "true", setting_type: "boolean", category: "content", description: "Play the next episode automatically" },
    // SEO
    SettingRow { key: "meta_title", value: "Streaming Hub - Watch online", setting_type: "string", category: "seo", description: "Default meta title" },
    SettingRow { key: "meta_keywords", value: "movies,series,streaming", setting_type: "string", category: "seo", description: "Default meta keywords" },
    // Social
    SettingRow { key: "social_links", value: r#"{"facebook":"","twitter":"","instagram":"","youtube":""}"#, setting_type: "json", category: "social", description: "Social network profile links" },
    // Security
    SettingRow { key: "registration_enabled", value: "true", setting_type: "boolean", category: "security", description: "Allow new accounts to register" },
    SettingRow { key: "max_login_attempts", value: "5", setting_type: "number", category: "security", description: "Failed logins before lockout" },
    SettingRow { key: "session_timeout_minutes", value: "60", setting_type: "number", category: "security", description: "Idle session lifetime" },
];

struct UserRow {
    username: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    role: &'static str,
    is_active: bool,
    created_at: &'static str,
}

const ADMIN_USER: UserRow = UserRow {
    username: "admin",
    email: "admin@example.com",
    first_name: "Site",
    last_name: "Administrator",
    role: "admin",
    is_active: true,
    created_at: "2024-01-01 09:00:00.000",
};

#[rustfmt::skip]
const DEMO_USERS: &[UserRow] = &[
    UserRow { username: "moderator", email: "moderator@example.com", first_name: "Mona", last_name: "Saleh", role: "moderator", is_active: true, created_at: "2024-01-02 09:00:00.000" },
    UserRow { username: "viewer", email: "viewer@example.com", first_name: "Omar", last_name: "Haddad", role: "user", is_active: true, created_at: "2024-01-03 09:00:00.000" },
    UserRow { username: "suspended", email: "suspended@example.com", first_name: "Sami", last_name: "Nasser", role: "user", is_active: false, created_at: "2024-01-04 09:00:00.000" },
];

struct ContentRow {
    id: i64,
    title: &'static str,
    title_ar: &'static str,
    description: &'static str,
    content_type: &'static str,
    release_date: &'static str,
    rating: f64,
    duration: Option<i64>,
    view_count: i64,
    download_count: i64,
    is_active: bool,
    created_at: &'static str,
    categories: &'static [i64],
    genres: &'static [i64],
}

#[rustfmt::skip]
const DEMO_CONTENT: &[ContentRow] = &[
    ContentRow { id: 1, title: "The Last Horizon", title_ar: "الأفق الأخير", description: "A crew races to reach a collapsing star system.", content_type: "movie", release_date: "2023-06-14", rating: 4.8, duration: Some(128), view_count: 1520, download_count: 340, is_active: true, created_at: "2024-01-05 10:00:00.000", categories: &[1], genres: &[1, 6, 10] },
    ContentRow { id: 2, title: "Desert Wind", title_ar: "رياح الصحراء", description: "Two strangers cross the desert together.", content_type: "movie", release_date: "2022-11-02", rating: 4.2, duration: Some(104), view_count: 860, download_count: 120, is_active: true, created_at: "2024-02-10 10:00:00.000", categories: &[1], genres: &[3, 10] },
    ContentRow { id: 3, title: "Midnight Laughs", title_ar: "ضحكات منتصف الليل", description: "A stand-up night gone wrong.", content_type: "movie", release_date: "2021-03-19", rating: 3.9, duration: Some(95), view_count: 75, download_count: 12, is_active: true, created_at: "2024-03-15 10:00:00.000", categories: &[1], genres: &[2] },
    ContentRow { id: 4, title: "Crown of Sand", title_ar: "تاج الرمال", description: "A family fights over a desert kingdom.", content_type: "series", release_date: "2023-01-10", rating: 4.7, duration: Some(45), view_count: 2300, download_count: 410, is_active: true, created_at: "2024-04-20 10:00:00.000", categories: &[2], genres: &[3, 7] },
    ContentRow { id: 5, title: "Neon District", title_ar: "حي النيون", description: "Detectives in a city that never sleeps.", content_type: "series", release_date: "2024-02-01", rating: 4.4, duration: Some(50), view_count: 95, download_count: 20, is_active: true, created_at: "2024-05-25 10:00:00.000", categories: &[2], genres: &[6, 7] },
    ContentRow { id: 6, title: "Morning Talk", title_ar: "حديث الصباح", description: "Daily conversations with guests.", content_type: "program", release_date: "2024-01-01", rating: 3.6, duration: Some(60), view_count: 410, download_count: 30, is_active: true, created_at: "2024-06-30 10:00:00.000", categories: &[3], genres: &[9] },
    ContentRow { id: 7, title: "Sky Racer", title_ar: "متسابق السماء", description: "Arcade racing above the clouds.", content_type: "game", release_date: "2023-09-09", rating: 4.5, duration: None, view_count: 120, download_count: 95, is_active: true, created_at: "2024-07-04 10:00:00.000", categories: &[4], genres: &[1] },
    ContentRow { id: 8, title: "StreamBox Player", title_ar: "مشغل ستريم بوكس", description: "Media player for the catalog.", content_type: "application", release_date: "2024-03-03", rating: 4.1, duration: None, view_count: 60, download_count: 55, is_active: true, created_at: "2024-08-08 10:00:00.000", categories: &[5], genres: &[] },
    ContentRow { id: 9, title: "Forgotten Reel", title_ar: "البكرة المنسية", description: "Withdrawn from the catalog.", content_type: "movie", release_date: "2019-05-05", rating: 4.9, duration: Some(110), view_count: 5000, download_count: 900, is_active: false, created_at: "2024-09-09 10:00:00.000", categories: &[1], genres: &[3] },
];

struct EpisodeRow {
    id: i64,
    content_id: i64,
    season_number: i64,
    episode_number: i64,
    title: &'static str,
    title_ar: &'static str,
    duration: i64,
}

#[rustfmt::skip]
const DEMO_EPISODES: &[EpisodeRow] = &[
    EpisodeRow { id: 1, content_id: 4, season_number: 1, episode_number: 1, title: "The Inheritance", title_ar: "الميراث", duration: 47 },
    EpisodeRow { id: 2, content_id: 4, season_number: 1, episode_number: 2, title: "Old Alliances", title_ar: "تحالفات قديمة", duration: 44 },
    EpisodeRow { id: 3, content_id: 4, season_number: 1, episode_number: 3, title: "The Oasis", title_ar: "الواحة", duration: 46 },
    EpisodeRow { id: 4, content_id: 4, season_number: 1, episode_number: 4, title: "Sandstorm", title_ar: "عاصفة رملية", duration: 52 },
    EpisodeRow { id: 5, content_id: 4, season_number: 2, episode_number: 1, title: "A New Crown", title_ar: "تاج جديد", duration: 49 },
    EpisodeRow { id: 6, content_id: 4, season_number: 2, episode_number: 2, title: "Exile", title_ar: "المنفى", duration: 45 },
    EpisodeRow { id: 7, content_id: 5, season_number: 1, episode_number: 1, title: "Static", title_ar: "تشويش", duration: 51 },
    EpisodeRow { id: 8, content_id: 5, season_number: 1, episode_number: 2, title: "Afterglow", title_ar: "الوهج", duration: 50 },
    EpisodeRow { id: 9, content_id: 5, season_number: 1, episode_number: 3, title: "Blackout", title_ar: "انقطاع", duration: 53 },
];

struct DownloadRow {
    id: i64,
    content_id: i64,
    episode_id: Option<i64>,
    quality: &'static str,
    size: &'static str,
    url: &'static str,
    server_name: &'static str,
}

#[rustfmt::skip]
const DEMO_DOWNLOAD_LINKS: &[DownloadRow] = &[
    DownloadRow { id: 1, content_id: 1, episode_id: None, quality: "1080p", size: "2.1 GB", url: "https://cdn.example.com/dl/last-horizon-1080p.mp4", server_name: "Main" },
    DownloadRow { id: 2, content_id: 1, episode_id: None, quality: "720p", size: "1.2 GB", url: "https://cdn.example.com/dl/last-horizon-720p.mp4", server_name: "Main" },
    DownloadRow { id: 3, content_id: 1, episode_id: None, quality: "480p", size: "700 MB", url: "https://mirror.example.com/dl/last-horizon-480p.mp4", server_name: "Mirror" },
    DownloadRow { id: 4, content_id: 2, episode_id: None, quality: "1080p", size: "1.9 GB", url: "https://cdn.example.com/dl/desert-wind-1080p.mp4", server_name: "Main" },
    DownloadRow { id: 5, content_id: 2, episode_id: None, quality: "720p", size: "1.0 GB", url: "https://cdn.example.com/dl/desert-wind-720p.mp4", server_name: "Main" },
    DownloadRow { id: 6, content_id: 4, episode_id: Some(1), quality: "1080p", size: "850 MB", url: "https://cdn.example.com/dl/crown-of-sand-s01e01-1080p.mp4", server_name: "Main" },
    DownloadRow { id: 7, content_id: 4, episode_id: Some(2), quality: "1080p", size: "820 MB", url: "https://cdn.example.com/dl/crown-of-sand-s01e02-1080p.mp4", server_name: "Main" },
];

struct StreamingRow {
    id: i64,
    content_id: i64,
    episode_id: Option<i64>,
    quality: &'static str,
    url: &'static str,
    server_name: &'static str,
}

#[rustfmt::skip]
const DEMO_STREAMING_LINKS: &[StreamingRow] = &[
    StreamingRow { id: 1, content_id: 1, episode_id: None, quality: "1080p", url: "https://stream.example.com/hls/last-horizon/master.m3u8", server_name: "Main" },
    StreamingRow { id: 2, content_id: 1, episode_id: None, quality: "720p", url: "https://backup.example.com/hls/last-horizon/720.m3u8", server_name: "Backup" },
    StreamingRow { id: 3, content_id: 2, episode_id: None, quality: "1080p", url: "https://stream.example.com/hls/desert-wind/master.m3u8", server_name: "Main" },
    StreamingRow { id: 4, content_id: 4, episode_id: Some(1), quality: "1080p", url: "https://stream.example.com/hls/crown-of-sand/s01e01.m3u8", server_name: "Main" },
    StreamingRow { id: 5, content_id: 4, episode_id: Some(2), quality: "1080p", url: "https://stream.example.com/hls/crown-of-sand/s01e02.m3u8", server_name: "Main" },
    StreamingRow { id: 6, content_id: 5, episode_id: Some(7), quality: "720p", url: "https://stream.example.com/hls/neon-district/s01e01.m3u8", server_name: "Main" },
];

/// Seed everything; demo rows only when `seed.demo_content` is set.
pub async fn seed_all(
    conn: &mut SqliteConnection,
    seed: &SeedConfig,
) -> RepositoryResult<SeedReport> {
    let mut report = SeedReport::default();

    report.record("categories", seed_categories(conn).await?);
    report.record("genres", seed_genres(conn).await?);
    report.record("site_settings", seed_site_settings(conn).await?);
    report.record(
        "users",
        seed_users(conn, std::slice::from_ref(&ADMIN_USER), &seed.bootstrap_password).await?,
    );

    if seed.demo_content {
        report.record(
            "users",
            seed_users(conn, DEMO_USERS, &seed.bootstrap_password).await?,
        );
        let (content, categories, genres) = seed_content(conn).await?;
        report.record("content", content);
        report.record("content_categories", categories);
        report.record("content_genres", genres);
        report.record("episodes", seed_episodes(conn).await?);
        report.record("download_links", seed_download_links(conn).await?);
        report.record("streaming_links", seed_streaming_links(conn).await?);
    }

    Ok(report)
}

async fn seed_categories(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (position, row) in CATEGORIES.iter().enumerate() {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO categories (id, name, name_ar, slug, description, icon, color, sort_order)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.name_ar)
        .bind(row.slug)
        .bind(row.description)
        .bind(row.icon)
        .bind(row.color)
        .bind(position as i64 + 1)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_genres(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (position, row) in GENRES.iter().enumerate() {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO genres (id, name, name_ar, slug, color, sort_order)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.name_ar)
        .bind(row.slug)
        .bind(row.color)
        .bind(position as i64 + 1)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_site_settings(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for row in SITE_SETTINGS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO site_settings (setting_key, setting_value, setting_type, category, description)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(row.key)
        .bind(row.value)
        .bind(row.setting_type)
        .bind(row.category)
        .bind(row.description)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

/// Accounts that already exist are skipped before hashing.
async fn seed_users(
    conn: &mut SqliteConnection,
    rows: &[UserRow],
    password: &str,
) -> RepositoryResult<u64> {
    let mut inserted = 0;
    for row in rows {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE username = ? OR email = ?")
                .bind(row.username)
                .bind(row.email)
                .fetch_optional(&mut *conn)
                .await?;
        if existing.is_some() {
            continue;
        }

        let password_hash = hash_password(password).map_err(|e| {
            RepositoryError::credential(format!("hashing password for {}: {}", row.username, e))
        })?;

        inserted += sqlx::query(
            "INSERT OR IGNORE INTO users (username, email, password_hash, first_name, last_name, role, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.username)
        .bind(row.email)
        .bind(password_hash)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.role)
        .bind(row.is_active)
        .bind(row.created_at)
        .bind(row.created_at)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_content(conn: &mut SqliteConnection) -> Result<(u64, u64, u64), sqlx::Error> {
    let (mut content, mut categories, mut genres) = (0, 0, 0);

    for row in DEMO_CONTENT {
        content += sqlx::query(
            "INSERT OR IGNORE INTO content (id, title, title_ar, description, type, poster, release_date,
             rating, duration, view_count, download_count, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(row.title)
        .bind(row.title_ar)
        .bind(row.description)
        .bind(row.content_type)
        .bind(format!("/posters/{}.jpg", row.id))
        .bind(row.release_date)
        .bind(row.rating)
        .bind(row.duration)
        .bind(row.view_count)
        .bind(row.download_count)
        .bind(row.is_active)
        .bind(row.created_at)
        .bind(row.created_at)
        .execute(&mut *conn)
        .await?
        .rows_affected();

        for category_id in row.categories {
            categories += sqlx::query(
                "INSERT OR IGNORE INTO content_categories (content_id, category_id) VALUES (?, ?)",
            )
            .bind(row.id)
            .bind(*category_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        }

        for genre_id in row.genres {
            genres += sqlx::query(
                "INSERT OR IGNORE INTO content_genres (content_id, genre_id) VALUES (?, ?)",
            )
            .bind(row.id)
            .bind(*genre_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        }
    }

    Ok((content, categories, genres))
}

async fn seed_episodes(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for row in DEMO_EPISODES {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO episodes (id, content_id, season_number, episode_number, title, title_ar, duration)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(row.content_id)
        .bind(row.season_number)
        .bind(row.episode_number)
        .bind(row.title)
        .bind(row.title_ar)
        .bind(row.duration)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_download_links(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for row in DEMO_DOWNLOAD_LINKS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO download_links (id, content_id, episode_id, quality, size, url, server_name)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(row.content_id)
        .bind(row.episode_id)
        .bind(row.quality)
        .bind(row.size)
        .bind(row.url)
        .bind(row.server_name)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_streaming_links(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for row in DEMO_STREAMING_LINKS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO streaming_links (id, content_id, episode_id, quality, url, server_name)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(row.id)
        .bind(row.content_id)
        .bind(row.episode_id)
        .bind(row.quality)
        .bind(row.url)
        .bind(row.server_name)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}
