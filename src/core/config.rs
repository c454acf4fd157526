//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::signup::{ApiBaseUrl, DEFAULT_API_BASE_URL};

/// Environment variable holding the backend base URL
pub const API_BASE_URL_VAR: &str = "NORI_API_BASE_URL";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the marketplace backend API
    /// Example: https://api.nori.com
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var(API_BASE_URL_VAR)
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Check if the backend URL is configured
    pub fn has_api_base_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Backend URL, falling back to the same-origin `/api` prefix
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Backend URL handed to every page render, and from there to the browser
    pub fn api_base(&self) -> ApiBaseUrl {
        ApiBaseUrl(self.api_base_url().to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_api_url() {
        let config = Config {
            api_base_url: Some("https://api.example.com".to_string()),
        };

        assert!(config.has_api_base_url());
        assert_eq!(config.api_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_config_without_api_url_uses_default() {
        let config = Config { api_base_url: None };

        assert!(!config.has_api_base_url());
        assert_eq!(config.api_base_url(), "/api");
    }

    #[test]
    fn test_api_base_carries_runtime_url() {
        let config = Config {
            api_base_url: Some("http://localhost:5000".to_string()),
        };
        assert_eq!(config.api_base(), ApiBaseUrl("http://localhost:5000".to_string()));

        let config = Config { api_base_url: None };
        assert_eq!(config.api_base(), ApiBaseUrl("/api".to_string()));
    }
}
