use async_trait::async_trait;

use crate::types::{
    Bar, BarsRequest, Capability, PatternRequest, StockPattern, StockaiError, SymbolInfo,
    SymbolSearchRequest,
};

/// Focused role trait for connectors that look up ticker symbols.
#[async_trait]
pub trait SymbolSearchProvider: Send + Sync {
    /// Return candidate symbols ranked by the backend's own relevance.
    async fn search_symbols(
        &self,
        req: SymbolSearchRequest,
    ) -> Result<Vec<SymbolInfo>, StockaiError>;
}

/// Focused role trait for connectors that serve historical OHLCV bars.
#[async_trait]
pub trait BarsProvider: Send + Sync {
    /// Fetch the bars matching `req`. The returned collection replaces any prior one.
    async fn bars(&self, req: BarsRequest) -> Result<Vec<Bar>, StockaiError>;
}

/// Focused role trait for connectors that serve historical pattern matches.
#[async_trait]
pub trait PatternProvider: Send + Sync {
    /// Fetch segments of the symbol's history that resemble its latest trend.
    async fn patterns(&self, req: PatternRequest) -> Result<Vec<StockPattern>, StockaiError>;
}

/// Focused role trait for connectors that can probe backend liveness.
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Succeed when the backend reports itself healthy.
    async fn health(&self) -> Result<(), StockaiError>;
}

/// Main connector trait: identity plus capability discovery.
///
/// Each `as_*_provider` accessor defaults to `None`; connectors advertise a
/// capability by returning `Some(self)`.
pub trait StockaiConnector: Send + Sync {
    /// A stable identifier used in logs and errors (e.g. "stockai-http").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise symbol search.
    fn as_symbol_search_provider(&self) -> Option<&dyn SymbolSearchProvider> {
        None
    }

    /// Advertise historical bars.
    fn as_bars_provider(&self) -> Option<&dyn BarsProvider> {
        None
    }

    /// Advertise pattern matches.
    fn as_pattern_provider(&self) -> Option<&dyn PatternProvider> {
        None
    }

    /// Advertise the health probe.
    fn as_health_provider(&self) -> Option<&dyn HealthProvider> {
        None
    }

    /// Capabilities this connector advertises, in endpoint order.
    fn capabilities(&self) -> Vec<Capability> {
        let mut out = Vec::with_capacity(4);
        if self.as_symbol_search_provider().is_some() {
            out.push(Capability::SymbolSearch);
        }
        if self.as_bars_provider().is_some() {
            out.push(Capability::Bars);
        }
        if self.as_pattern_provider().is_some() {
            out.push(Capability::Patterns);
        }
        if self.as_health_provider().is_some() {
            out.push(Capability::Health);
        }
        out
    }
}
