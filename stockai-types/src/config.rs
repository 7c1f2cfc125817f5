//! Configuration types shared by connectors and the dashboard.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API base URL.
pub const API_BASE_ENV: &str = "STOCKAI_API_BASE";
/// Base URL used when running against a local backend.
pub const FALLBACK_API_BASE: &str = "http://localhost:5000";

/// Resolution rules for the API base URL.
pub struct ApiBase;

impl ApiBase {
    /// Resolve the base URL from an explicit setting and the serving host.
    ///
    /// - a non-empty `configured` value wins;
    /// - otherwise `localhost` resolves to [`FALLBACK_API_BASE`];
    /// - anything else resolves to `""` (same origin).
    ///
    /// A trailing `/` is stripped so paths can be appended directly.
    #[must_use]
    pub fn resolve(configured: Option<&str>, host: Option<&str>) -> String {
        if let Some(base) = configured.map(str::trim).filter(|s| !s.is_empty()) {
            return base.trim_end_matches('/').to_string();
        }
        if host == Some("localhost") {
            return FALLBACK_API_BASE.to_string();
        }
        String::new()
    }
}

/// Settings for the HTTP connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute API base, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Optional per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: FALLBACK_API_BASE.to_string(),
            timeout: None,
            user_agent: concat!("stockai/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read the base URL from [`API_BASE_ENV`].
    ///
    /// A native process is its own host, so an unset variable resolves to
    /// the localhost fallback.
    #[must_use]
    pub fn from_env() -> Self {
        let configured = std::env::var(API_BASE_ENV).ok();
        Self::new(ApiBase::resolve(configured.as_deref(), Some("localhost")))
    }

    /// Set a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Knobs for the dashboard orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Results requested per symbol search.
    pub search_limit: u32,
    /// Bars requested on first load.
    pub default_bars_limit: u32,
    /// Increment applied by "load more".
    pub bars_limit_step: u32,
    /// Ceiling for "load more".
    pub max_bars_limit: u32,
    /// Rows per page in the bars table.
    pub bars_page_size: usize,
    /// Rows per page in the pattern table.
    pub patterns_page_size: usize,
    /// Trend segment length sent to the pattern endpoint.
    pub pattern_trend_length: u32,
    /// Minimum similarity sent to the pattern endpoint.
    pub pattern_similarity_score: u32,
    /// Patterns starting earlier than this many days before today are dropped.
    pub recent_pattern_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_limit: 30,
            default_bars_limit: 200,
            bars_limit_step: 200,
            max_bars_limit: 5000,
            bars_page_size: 50,
            patterns_page_size: 10,
            pattern_trend_length: 7,
            pattern_similarity_score: 80,
            recent_pattern_days: 3650,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_wins() {
        assert_eq!(
            ApiBase::resolve(Some("https://api.example.com/"), Some("localhost")),
            "https://api.example.com"
        );
    }

    #[test]
    fn localhost_falls_back() {
        assert_eq!(ApiBase::resolve(None, Some("localhost")), FALLBACK_API_BASE);
        assert_eq!(ApiBase::resolve(Some("  "), Some("localhost")), FALLBACK_API_BASE);
    }

    #[test]
    fn other_hosts_are_same_origin() {
        assert_eq!(ApiBase::resolve(None, Some("stockai.example.com")), "");
        assert_eq!(ApiBase::resolve(None, None), "");
    }
}
