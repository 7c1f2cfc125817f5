use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use stockai_core::{
    BarsRequest, Capability, DashboardConfig, DisplayOrder, SortedBars, StockPattern,
    StockaiConnector, StockaiError, SymbolInfo, SymbolSearchRequest, Timeframe,
};

/// Outcome of a dashboard fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    /// The response was applied to the view state.
    Applied(T),
    /// Nothing to fetch (empty query, no selection, limit already at max).
    Skipped,
    /// A newer request of the same kind was issued while this one was in
    /// flight; its response was discarded.
    Superseded,
}

impl<T> Fetch<T> {
    /// The applied value, if any.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(v) => Some(v),
            Self::Skipped | Self::Superseded => None,
        }
    }

    /// True for [`Fetch::Applied`].
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Per-kind request generations used to discard stale responses.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Generations {
    pub(crate) search: u64,
    pub(crate) bars: u64,
    pub(crate) patterns: u64,
}

#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) symbols: Vec<SymbolInfo>,
    pub(crate) selected: Option<String>,
    pub(crate) bars: SortedBars,
    pub(crate) loaded_timeframe: Timeframe,
    pub(crate) display_order: DisplayOrder,
    pub(crate) timeframe: Timeframe,
    pub(crate) start: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
    pub(crate) limit: u32,
    pub(crate) patterns: Vec<StockPattern>,
    pub(crate) searching: bool,
    pub(crate) loading_bars: bool,
    pub(crate) loading_patterns: bool,
    pub(crate) error: Option<String>,
    pub(crate) generations: Generations,
}

impl ViewState {
    fn new(cfg: &DashboardConfig) -> Self {
        Self {
            symbols: Vec::new(),
            selected: None,
            bars: SortedBars::default(),
            loaded_timeframe: Timeframe::default(),
            display_order: DisplayOrder::default(),
            timeframe: Timeframe::default(),
            start: None,
            end: None,
            limit: cfg.default_bars_limit,
            patterns: Vec::new(),
            searching: false,
            loading_bars: false,
            loading_patterns: false,
            error: None,
            generations: Generations::default(),
        }
    }

    pub(crate) const fn loading(&self) -> bool {
        self.searching || self.loading_bars || self.loading_patterns
    }
}

/// Dashboard orchestrator over a single connector.
///
/// All methods take `&self`; share it behind an `Arc` to issue overlapping
/// fetches from several tasks.
pub struct Dashboard {
    pub(crate) connector: Arc<dyn StockaiConnector>,
    pub(crate) cfg: DashboardConfig,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) state: Mutex<ViewState>,
}

/// Builder for constructing a [`Dashboard`] with custom configuration.
pub struct DashboardBuilder {
    connector: Option<Arc<dyn StockaiConnector>>,
    cfg: DashboardConfig,
    request_timeout: Option<Duration>,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a builder with default configuration and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: DashboardConfig::default(),
            request_timeout: None,
        }
    }

    /// Register the connector serving every request.
    ///
    /// Registering twice replaces the earlier connector.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn StockaiConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Results requested per symbol search.
    #[must_use]
    pub const fn search_limit(mut self, limit: u32) -> Self {
        self.cfg.search_limit = limit;
        self
    }

    /// Initial bar limit and the step and ceiling used by "load more".
    #[must_use]
    pub const fn bars_limits(mut self, initial: u32, step: u32, max: u32) -> Self {
        self.cfg.default_bars_limit = initial;
        self.cfg.bars_limit_step = step;
        self.cfg.max_bars_limit = max;
        self
    }

    /// Rows per page for the bars and pattern tables.
    #[must_use]
    pub const fn page_sizes(mut self, bars: usize, patterns: usize) -> Self {
        self.cfg.bars_page_size = bars;
        self.cfg.patterns_page_size = patterns;
        self
    }

    /// Bound each connector call. Unset by default, so a stalled request
    /// keeps the dashboard loading until a newer one supersedes it.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the dashboard.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered, if the bar or
    /// search limits are outside what a request accepts, or if a page size
    /// is zero.
    pub fn build(self) -> Result<Dashboard, StockaiError> {
        let connector = self.connector.ok_or_else(|| {
            StockaiError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        let cfg = self.cfg;
        if cfg.max_bars_limit > BarsRequest::MAX_LIMIT {
            return Err(StockaiError::InvalidArg(format!(
                "max bars limit {} exceeds {}",
                cfg.max_bars_limit,
                BarsRequest::MAX_LIMIT
            )));
        }
        if cfg.default_bars_limit == 0 || cfg.default_bars_limit > cfg.max_bars_limit {
            return Err(StockaiError::InvalidArg(format!(
                "default bars limit {} must be within 1..={}",
                cfg.default_bars_limit, cfg.max_bars_limit
            )));
        }
        if cfg.bars_page_size == 0 || cfg.patterns_page_size == 0 {
            return Err(StockaiError::InvalidArg(
                "page sizes must be positive".to_string(),
            ));
        }
        if !(1..=SymbolSearchRequest::MAX_LIMIT).contains(&cfg.search_limit) {
            return Err(StockaiError::InvalidArg(format!(
                "search limit {} must be within 1..={}",
                cfg.search_limit,
                SymbolSearchRequest::MAX_LIMIT
            )));
        }
        let state = Mutex::new(ViewState::new(&cfg));
        Ok(Dashboard {
            connector,
            cfg,
            request_timeout: self.request_timeout,
            state,
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Name of the underlying connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// Await a connector call, applying the optional request timeout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockai::core::call_with_timeout",
            skip(self, fut),
            fields(
                connector = self.connector.name(),
                capability = capability.as_str(),
            ),
        )
    )]
    pub(crate) async fn call_with_timeout<T, Fut>(
        &self,
        capability: Capability,
        fut: Fut,
    ) -> Result<T, StockaiError>
    where
        Fut: core::future::Future<Output = Result<T, StockaiError>>,
    {
        let Some(timeout) = self.request_timeout else {
            return fut.await;
        };
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(StockaiError::Transport(format!(
                "{capability} request timed out after {} ms",
                timeout.as_millis()
            )))
        })
    }

    /// Probe backend liveness through the connector's health capability.
    ///
    /// # Errors
    /// Returns `Unsupported` when the connector has no health probe, or the
    /// probe's own error.
    pub async fn health(&self) -> Result<(), StockaiError> {
        let provider = self
            .connector
            .as_health_provider()
            .ok_or_else(|| StockaiError::unsupported(Capability::Health.as_str()))?;
        self.call_with_timeout(Capability::Health, provider.health())
            .await
    }
}
