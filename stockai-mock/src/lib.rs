//! stockai-mock
//!
//! Deterministic connectors for tests and demos.
//!
//! - [`MockConnector`] serves static fixtures the way the real backend
//!   would: prefix search ordered by symbol, bar filtering by date range,
//!   server-side ordering and limits.
//! - [`DynamicMockConnector`] defers every call to a [`DynamicMockController`]
//!   so tests can script failures, hangs and delayed responses.
//!
//! The fixture symbol `FAIL` always errors and `TIMEOUT` answers after a
//! short delay.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use stockai_core::connector::{
    BarsProvider, HealthProvider, PatternProvider, StockaiConnector, SymbolSearchProvider,
};
use stockai_core::{
    Bar, BarsRequest, Capability, PatternRequest, SortOrder, StockPattern, StockaiError,
    SymbolInfo, SymbolSearchRequest, decode_date,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Default `limit` the backend applies to `/api/bars`.
const DEFAULT_BARS_LIMIT: usize = 500;

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
#[derive(Debug, Default)]
pub struct MockConnector {
    calls: [AtomicUsize; 4],
}

impl MockConnector {
    /// Create a connector with zeroed call counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last trading day present in the fixture series.
    #[must_use]
    pub fn last_trading_day() -> chrono::NaiveDate {
        fixtures::bars::anchor()
    }

    /// Number of calls served for `capability` so far.
    #[must_use]
    pub fn calls(&self, capability: Capability) -> usize {
        self.calls[Self::slot(capability)].load(Ordering::SeqCst)
    }

    const fn slot(capability: Capability) -> usize {
        match capability {
            Capability::SymbolSearch => 0,
            Capability::Bars => 1,
            Capability::Patterns => 2,
            _ => 3,
        }
    }

    async fn enter(&self, capability: Capability, key: &str) -> Result<(), StockaiError> {
        self.calls[Self::slot(capability)].fetch_add(1, Ordering::SeqCst);
        match key {
            "FAIL" => Err(StockaiError::request(
                500,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn in_range(bar: &Bar, req: &BarsRequest) -> Result<bool, StockaiError> {
        if req.start().is_none() && req.end().is_none() {
            return Ok(true);
        }
        let d = decode_date(bar.date)?;
        Ok(req.start().is_none_or(|s| d >= s) && req.end().is_none_or(|e| d <= e))
    }
}

impl StockaiConnector for MockConnector {
    fn name(&self) -> &'static str {
        "stockai-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
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

#[async_trait]
impl SymbolSearchProvider for MockConnector {
    async fn search_symbols(
        &self,
        req: SymbolSearchRequest,
    ) -> Result<Vec<SymbolInfo>, StockaiError> {
        self.enter(Capability::SymbolSearch, req.query()).await?;
        let limit = usize::try_from(req.limit()).unwrap_or(usize::MAX);
        Ok(fixtures::symbols::search(req.query(), limit))
    }
}

#[async_trait]
impl BarsProvider for MockConnector {
    async fn bars(&self, req: BarsRequest) -> Result<Vec<Bar>, StockaiError> {
        self.enter(Capability::Bars, req.symbol()).await?;
        let series = fixtures::bars::series(req.symbol(), req.timeframe())
            .ok_or_else(|| StockaiError::not_found(format!("bars for {}", req.symbol())))?;

        let mut kept = Vec::with_capacity(series.len());
        for bar in series {
            if Self::in_range(&bar, &req)? {
                kept.push(bar);
            }
        }
        // Fixtures are oldest first.
        if req.order().unwrap_or_default() == SortOrder::Desc {
            kept.reverse();
        }
        let limit = req
            .limit()
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(DEFAULT_BARS_LIMIT);
        kept.truncate(limit);
        Ok(kept)
    }
}

#[async_trait]
impl PatternProvider for MockConnector {
    async fn patterns(&self, req: PatternRequest) -> Result<Vec<StockPattern>, StockaiError> {
        self.enter(Capability::Patterns, req.symbol()).await?;
        fixtures::patterns::by_symbol(req.symbol())
            .ok_or_else(|| StockaiError::not_found(format!("patterns for {}", req.symbol())))
    }
}

#[async_trait]
impl HealthProvider for MockConnector {
    async fn health(&self) -> Result<(), StockaiError> {
        self.enter(Capability::Health, "").await
    }
}
