//! stockai-http
//!
//! Connector that implements `StockaiConnector` against the stockai REST
//! backend. Exposes symbol search, historical bars, pattern matches and the
//! health probe.
//!
//! Every list endpoint answers with a `{ "results": [...] }` envelope. A
//! non-2xx answer becomes [`StockaiError::Request`] whose message is the
//! response body verbatim.
#![warn(missing_docs)]

/// Transport abstraction and the production `reqwest` adapter.
pub mod adapter;

use std::sync::Arc;

use adapter::{HttpTransport, QueryPairs, ReqwestAdapter};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use stockai_core::{
    Bar, BarsRequest, Capability, ClientConfig, Envelope, HealthStatus, PatternRequest,
    StockPattern, StockaiError, SymbolInfo, SymbolSearchRequest,
    connector::{
        BarsProvider, HealthProvider, PatternProvider, StockaiConnector, SymbolSearchProvider,
    },
};

/// Public connector type. Construct with [`HttpConnector::new`] or [`HttpConnector::from_env`].
#[derive(Clone)]
pub struct HttpConnector {
    transport: Arc<dyn HttpTransport>,
}

impl HttpConnector {
    /// Connector name reported in logs and tracing spans.
    pub const NAME: &'static str = "stockai-http";

    /// Build a connector for `config`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL is not an absolute http(s) URL.
    pub fn new(config: &ClientConfig) -> Result<Self, StockaiError> {
        let adapter = ReqwestAdapter::new(config)?;
        Ok(Self::from_transport(Arc::new(adapter)))
    }

    /// Build a connector from `STOCKAI_API_BASE`, falling back to localhost.
    ///
    /// # Errors
    /// Same as [`HttpConnector::new`].
    pub fn from_env() -> Result<Self, StockaiError> {
        Self::new(&ClientConfig::from_env())
    }

    /// Build on top of any transport, e.g. one created with `from_fn`.
    #[must_use]
    pub fn from_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        capability: Capability,
        query: &QueryPairs,
    ) -> Result<Vec<T>, StockaiError> {
        let body = self.transport.get(capability.path(), query).await?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            StockaiError::Data(format!("malformed {capability} response: {e}"))
        })?;
        Ok(envelope.results)
    }
}

#[async_trait]
impl SymbolSearchProvider for HttpConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockai_http::search_symbols",
            skip(self, req),
            fields(query = %req.query(), limit = req.limit()),
        )
    )]
    async fn search_symbols(
        &self,
        req: SymbolSearchRequest,
    ) -> Result<Vec<SymbolInfo>, StockaiError> {
        self.get_results(Capability::SymbolSearch, &req.query_pairs())
            .await
    }
}

#[async_trait]
impl BarsProvider for HttpConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockai_http::bars",
            skip(self, req),
            fields(symbol = %req.symbol(), timeframe = %req.timeframe()),
        )
    )]
    async fn bars(&self, req: BarsRequest) -> Result<Vec<Bar>, StockaiError> {
        self.get_results(Capability::Bars, &req.query_pairs()).await
    }
}

#[async_trait]
impl PatternProvider for HttpConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockai_http::patterns",
            skip(self, req),
            fields(symbol = %req.symbol(), trend_length = req.trend_length()),
        )
    )]
    async fn patterns(&self, req: PatternRequest) -> Result<Vec<StockPattern>, StockaiError> {
        self.get_results(Capability::Patterns, &req.query_pairs())
            .await
    }
}

#[async_trait]
impl HealthProvider for HttpConnector {
    async fn health(&self) -> Result<(), StockaiError> {
        let body = self.transport.get(Capability::Health.path(), &[]).await?;
        let status: HealthStatus = serde_json::from_str(&body)
            .map_err(|e| StockaiError::Data(format!("malformed health response: {e}")))?;
        if status.status == "ok" {
            Ok(())
        } else {
            Err(StockaiError::Data(format!(
                "backend reported status '{}'",
                status.status
            )))
        }
    }
}

impl StockaiConnector for HttpConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "stockai"
    }

    fn as_symbol_search_provider(&self) -> Option<&dyn SymbolSearchProvider> {
        Some(self as &dyn SymbolSearchProvider)
    }

    fn as_bars_provider(&self) -> Option<&dyn BarsProvider> {
        Some(self as &dyn BarsProvider)
    }

    fn as_pattern_provider(&self) -> Option<&dyn PatternProvider> {
        Some(self as &dyn PatternProvider)
    }

    fn as_health_provider(&self) -> Option<&dyn HealthProvider> {
        Some(self as &dyn HealthProvider)
    }
}
