//! Storefront configuration.
//!
//! Every endpoint has a hardcoded default. Environment variables only exist so
//! the storefront can be pointed at a local mirror or test server.
//!
//! # Example
//!
//! ```ignore
//! use storefront::config::StorefrontConfig;
//!
//! let config = StorefrontConfig::default()
//!     .with_log_endpoint("http://127.0.0.1:4000/logs")
//!     .with_loading_delay(Duration::ZERO);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::models::CatalogSource;

/// Merchandise listing endpoint
pub const CLOTHES_URL: &str = "https://fakestoreapi.com/products";

/// Literary listing endpoint (fixed subject and limit)
pub const BOOKS_URL: &str = "https://openlibrary.org/subjects/fantasy.json?limit=10";

/// Cover image host for the literary feed
pub const COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

/// Local logging sink
pub const LOG_ENDPOINT: &str = "http://localhost:3000/logs";

/// Artificial delay before a catalog request is issued
pub const LOADING_DELAY_MS: u64 = 500;

/// Pointer dwell required before a HOVER event is reported
pub const HOVER_DWELL_MS: u64 = 1000;

pub const ENV_CLOTHES_URL: &str = "STOREFRONT_CLOTHES_URL";
pub const ENV_BOOKS_URL: &str = "STOREFRONT_BOOKS_URL";
pub const ENV_COVERS_URL: &str = "STOREFRONT_COVERS_URL";
pub const ENV_LOG_ENDPOINT: &str = "STOREFRONT_LOG_ENDPOINT";
pub const ENV_USER_AGENT: &str = "STOREFRONT_USER_AGENT";
pub const ENV_LOG_FILE: &str = "STOREFRONT_LOG_FILE";

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub clothes_url: String,
    pub books_url: String,
    pub covers_base_url: String,
    pub log_endpoint: String,
    /// Client identification string matched against known browser names
    pub user_agent: String,
    pub loading_delay: Duration,
    pub hover_dwell: Duration,
    /// Diagnostic log file. `None` resolves to `~/.storefront/storefront.log`.
    pub log_file: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            clothes_url: CLOTHES_URL.to_string(),
            books_url: BOOKS_URL.to_string(),
            covers_base_url: COVERS_BASE_URL.to_string(),
            log_endpoint: LOG_ENDPOINT.to_string(),
            user_agent: default_user_agent(),
            loading_delay: Duration::from_millis(LOADING_DELAY_MS),
            hover_dwell: Duration::from_millis(HOVER_DWELL_MS),
            log_file: None,
        }
    }
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with any `STOREFRONT_*` overrides from the environment applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env_value(ENV_CLOTHES_URL) {
            config.clothes_url = url;
        }
        if let Some(url) = env_value(ENV_BOOKS_URL) {
            config.books_url = url;
        }
        if let Some(url) = env_value(ENV_COVERS_URL) {
            config.covers_base_url = url;
        }
        if let Some(url) = env_value(ENV_LOG_ENDPOINT) {
            config.log_endpoint = url;
        }
        if let Some(agent) = env_value(ENV_USER_AGENT) {
            config.user_agent = agent;
        }
        if let Some(path) = env_value(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }
        config
    }

    pub fn with_clothes_url(mut self, url: impl Into<String>) -> Self {
        self.clothes_url = url.into();
        self
    }

    pub fn with_books_url(mut self, url: impl Into<String>) -> Self {
        self.books_url = url.into();
        self
    }

    pub fn with_log_endpoint(mut self, url: impl Into<String>) -> Self {
        self.log_endpoint = url.into();
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    pub fn with_hover_dwell(mut self, dwell: Duration) -> Self {
        self.hover_dwell = dwell;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// URL for a catalog source.
    pub fn catalog_url(&self, source: CatalogSource) -> &str {
        match source {
            CatalogSource::Merchandise => &self.clothes_url,
            CatalogSource::Books => &self.books_url,
        }
    }

    /// Large cover image URL for an Open Library cover id.
    pub fn cover_url(&self, cover_id: i64) -> String {
        format!(
            "{}/b/id/{}-L.jpg",
            self.covers_base_url.trim_end_matches('/'),
            cover_id
        )
    }

    /// Resolved diagnostic log path, if a home directory exists.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::home_dir().map(|home| home.join(".storefront").join("storefront.log"))
        })
    }
}

fn default_user_agent() -> String {
    format!("storefront/{} (terminal)", env!("CARGO_PKG_VERSION"))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_endpoints() {
        let config = StorefrontConfig::default();
        assert_eq!(config.clothes_url, "https://fakestoreapi.com/products");
        assert_eq!(
            config.books_url,
            "https://openlibrary.org/subjects/fantasy.json?limit=10"
        );
        assert_eq!(config.log_endpoint, "http://localhost:3000/logs");
        assert_eq!(config.loading_delay, Duration::from_millis(500));
        assert_eq!(config.hover_dwell, Duration::from_millis(1000));
    }

    #[test]
    fn test_cover_url_template() {
        let config = StorefrontConfig::default();
        assert_eq!(
            config.cover_url(240727),
            "https://covers.openlibrary.org/b/id/240727-L.jpg"
        );
    }

    #[test]
    fn test_catalog_url_per_source() {
        let config = StorefrontConfig::default()
            .with_clothes_url("http://mirror/products")
            .with_books_url("http://mirror/books");
        assert_eq!(
            config.catalog_url(CatalogSource::Merchandise),
            "http://mirror/products"
        );
        assert_eq!(config.catalog_url(CatalogSource::Books), "http://mirror/books");
    }

    #[test]
    fn test_builder_setters() {
        let config = StorefrontConfig::new()
            .with_log_endpoint("http://127.0.0.1:9/logs")
            .with_user_agent("Mozilla/5.0 Firefox/120.0")
            .with_loading_delay(Duration::ZERO)
            .with_hover_dwell(Duration::from_millis(10))
            .with_log_file("/tmp/storefront.log");
        assert_eq!(config.log_endpoint, "http://127.0.0.1:9/logs");
        assert_eq!(config.user_agent, "Mozilla/5.0 Firefox/120.0");
        assert_eq!(config.loading_delay, Duration::ZERO);
        assert_eq!(config.hover_dwell, Duration::from_millis(10));
        assert_eq!(
            config.log_file_path(),
            Some(PathBuf::from("/tmp/storefront.log"))
        );
    }

    #[test]
    fn test_default_user_agent_is_unknown_browser() {
        let agent = default_user_agent();
        assert!(agent.starts_with("storefront/"));
    }
}
