//! Client Configuration

use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend address
pub const API_URL_ENV: &str = "STAR_TAGS_API_URL";

/// Local backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from `STAR_TAGS_API_URL`, falling back to the default
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    /// Build from an optional override; blank values fall back to the default
    pub fn from_value(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an `/api/...` path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(ClientConfig::default().base_url, "http://127.0.0.1");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("http://localhost:8080/");
        assert_eq!(config.endpoint("/api/user"), "http://localhost:8080/api/user");
    }

    #[test]
    fn test_repeated_trailing_slashes_trimmed() {
        let config = ClientConfig::with_base_url("http://localhost:8080//");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_override_value() {
        let config = ClientConfig::from_value(Some("  http://10.0.0.2:3000/ ".to_string()));
        assert_eq!(config.base_url, "http://10.0.0.2:3000");

        assert_eq!(ClientConfig::from_value(Some("   ".to_string())), ClientConfig::default());
        assert_eq!(ClientConfig::from_value(None), ClientConfig::default());
    }

    #[test]
    fn test_deserialize_defaults_base_url() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
