use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file, created along with its parent directory if missing
    pub path: PathBuf,
    /// Schema script read at initialize time; the bundled schema is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

/// Business thresholds used by the content listing filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub featured_min_rating: f64,
    pub trending_min_views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Insert the demo catalog, users and links next to the reference rows
    pub demo_content: bool,
    /// Password the seeded demo accounts are created with
    pub bootstrap_password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("serverdata/database.db"),
            schema_path: None,
            max_connections: Some(1),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            featured_min_rating: 4.5,
            trending_min_views: 100,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_content: true,
            bootstrap_password: "admin123".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration file, writing the defaults to it first if it does not exist.
    pub fn load(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();

        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            if let Some(parent) = config_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(config_file, contents)?;
            Ok(default_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.database.path, PathBuf::from("serverdata/database.db"));
        assert_eq!(config.database.max_connections, Some(1));
        assert_eq!(config.catalog.featured_min_rating, 4.5);
        assert_eq!(config.catalog.trending_min_views, 100);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [web]
            host = "127.0.0.1"
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.web.port, 9000);
        assert_eq!(config.database.path, PathBuf::from("serverdata/database.db"));
        assert!(config.seed.demo_content);
    }

    #[test]
    fn test_load_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.web.port, 8080);

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.catalog.trending_min_views, 100);
    }
}
