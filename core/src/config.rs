//! Base URL resolution.
//!
//! The base URL comes from the `API_BASE` environment variable and falls back
//! to a local address. An empty value counts as unset.

use crate::client::normalize_base_url;

pub const API_BASE_ENV: &str = "API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Settings a controller is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: normalize_base_url(api_base),
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_BASE_ENV).ok())
    }

    /// Resolve from an optional host-provided value.
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::new(&v),
            _ => Self::default(),
        }
    }

    /// Normalized base URL, never ending in `/`.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(ClientConfig::from_value(None).api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn empty_value_uses_default() {
        let config = ClientConfig::from_value(Some(String::new()));
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::from_value(Some("https://todo.example.com//".to_string()));
        assert_eq!(config.api_base(), "https://todo.example.com");
    }
}
