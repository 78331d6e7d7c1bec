//! Dashboard configuration

use serde::{Deserialize, Serialize};

/// Dashboard configuration
///
/// Plain data with builder methods; loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page size used when paginating list fetches
    pub page_size: u64,
    /// Username preselected when no container prop names one
    pub default_user: Option<String>,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With page size
    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// With default user
    #[inline]
    #[must_use]
    pub fn with_default_user(mut self, user: impl Into<String>) -> Self {
        self.default_user = Some(user.into());
        self
    }

    /// Fetch offset of a zero-based page
    #[inline]
    #[must_use]
    pub fn offset_for_page(&self, page: u64) -> u64 {
        page * self.page_size
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for invalid TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(ConfigError::Parse)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 30,
            default_user: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML document did not parse
    #[error("invalid configuration: {0}")]
    Parse(#[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_paginate_by_thirty() {
        let config = DashboardConfig::new();
        assert_eq!(config.page_size, 30);
        assert_eq!(config.offset_for_page(0), 0);
        assert_eq!(config.offset_for_page(2), 60);
    }

    #[test]
    fn builder_overrides() {
        let config = DashboardConfig::new()
            .with_page_size(20)
            .with_default_user("alice");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.default_user.as_deref(), Some("alice"));
    }

    #[test]
    fn toml_round_trip() {
        let config = DashboardConfig::from_toml_str("page_size = 10\n").unwrap();
        assert_eq!(config.page_size, 10);
        assert!(config.default_user.is_none());

        assert!(DashboardConfig::from_toml_str("page_size = \"ten\"").is_err());
    }
}
