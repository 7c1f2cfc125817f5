use std::sync::Arc;

use async_trait::async_trait;
use stockai_core::{ClientConfig, StockaiError};
use url::Url;

/// Query-string pairs in wire order.
pub type QueryPairs = [(&'static str, String)];

/// Transport abstraction (so tests can inject canned responses).
///
/// Implementations return the raw body of a successful response. A non-2xx
/// status must surface as [`StockaiError::Request`] carrying the body text.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue `GET {base}{path}?{query}` and return the response body.
    async fn get(&self, path: &str, query: &QueryPairs) -> Result<String, StockaiError>;
}

/// Production transport backed by a shared `reqwest::Client`.
///
/// `reqwest::Client` is internally reference counted, so clones share one
/// connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
    base: String,
}

/// Check that `base` is an absolute http(s) URL and strip any trailing `/`.
fn validate_base(base: &str) -> Result<String, StockaiError> {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(StockaiError::InvalidArg(
            "API base URL must not be empty".into(),
        ));
    }
    let parsed = Url::parse(trimmed)
        .map_err(|e| StockaiError::InvalidArg(format!("invalid API base URL '{trimmed}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
        return Err(StockaiError::InvalidArg(format!(
            "API base URL must be absolute http(s), got '{trimmed}'"
        )));
    }
    Ok(trimmed.to_string())
}

impl ReqwestAdapter {
    /// Build a client from `config`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty, relative or non-http base URL and
    /// `Transport` if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, StockaiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StockaiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(client, &config.base_url)
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute http(s) URL.
    pub fn with_client(client: reqwest::Client, base: &str) -> Result<Self, StockaiError> {
        Ok(Self {
            client,
            base: validate_base(base)?,
        })
    }

    /// Normalized base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

#[async_trait]
impl HttpTransport for ReqwestAdapter {
    async fn get(&self, path: &str, query: &QueryPairs) -> Result<String, StockaiError> {
        let url = format!("{}{path}", self.base);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| StockaiError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| StockaiError::Transport(e.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "stockai::http",
            path,
            status = status.as_u16(),
            bytes = body.len(),
            "response received"
        );

        if !status.is_success() {
            return Err(StockaiError::request(status.as_u16(), body));
        }
        Ok(body)
    }
}

impl dyn HttpTransport {
    /// Build a transport from a closure receiving the path and query pairs.
    pub fn from_fn<F>(f: F) -> Arc<dyn HttpTransport>
    where
        F: Send + Sync + 'static + Fn(&str, &QueryPairs) -> Result<String, StockaiError>,
    {
        struct FnTransport<F>(F);
        #[async_trait]
        impl<F> HttpTransport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(&str, &QueryPairs) -> Result<String, StockaiError>,
        {
            async fn get(&self, path: &str, query: &QueryPairs) -> Result<String, StockaiError> {
                (self.0)(path, query)
            }
        }
        Arc::new(FnTransport(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_validation() {
        assert_eq!(validate_base("http://localhost:5000/").unwrap(), "http://localhost:5000");
        assert_eq!(
            validate_base("https://api.example.com/stockai").unwrap(),
            "https://api.example.com/stockai"
        );
        assert!(matches!(validate_base(""), Err(StockaiError::InvalidArg(_))));
        assert!(matches!(validate_base("/api"), Err(StockaiError::InvalidArg(_))));
        assert!(matches!(validate_base("ftp://host"), Err(StockaiError::InvalidArg(_))));
        assert!(matches!(validate_base("mailto:a@b.c"), Err(StockaiError::InvalidArg(_))));
    }
}
