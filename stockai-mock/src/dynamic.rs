use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use stockai_core::connector::{
    BarsProvider, HealthProvider, PatternProvider, StockaiConnector, SymbolSearchProvider,
};
use stockai_core::{
    Bar, BarsRequest, PatternRequest, StockPattern, StockaiError, SymbolInfo, SymbolSearchRequest,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(StockaiError),
    /// Hang indefinitely (simulate a stalled request).
    Hang,
    /// Return the provided value after sleeping on the tokio clock.
    Delay(Duration, T),
}

impl<T> MockBehavior<T> {
    async fn run(self) -> Result<T, StockaiError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::Fail(e) => Err(e),
            Self::Hang => std::future::pending().await,
            Self::Delay(d, v) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
        }
    }
}

#[derive(Default)]
struct InternalState {
    search_rules: HashMap<String, MockBehavior<Vec<SymbolInfo>>>,
    bars_rules: HashMap<String, MockBehavior<Vec<Bar>>>,
    pattern_rules: HashMap<String, MockBehavior<Vec<StockPattern>>>,
    health_rule: Option<MockBehavior<()>>,
    search_requests: Vec<SymbolSearchRequest>,
    bars_requests: Vec<BarsRequest>,
    pattern_requests: Vec<PatternRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for symbol searches with this (trimmed) query.
    pub async fn set_search_behavior(
        &self,
        query: impl Into<String>,
        behavior: MockBehavior<Vec<SymbolInfo>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.search_rules.insert(query.into(), behavior);
    }

    /// Set the behavior for `bars` calls for a specific symbol.
    pub async fn set_bars_behavior(
        &self,
        symbol: impl Into<String>,
        behavior: MockBehavior<Vec<Bar>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.bars_rules.insert(symbol.into(), behavior);
    }

    /// Set the behavior for `patterns` calls for a specific symbol.
    pub async fn set_pattern_behavior(
        &self,
        symbol: impl Into<String>,
        behavior: MockBehavior<Vec<StockPattern>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.pattern_rules.insert(symbol.into(), behavior);
    }

    /// Set the behavior for health probes. Unset probes succeed.
    pub async fn set_health_behavior(&self, behavior: MockBehavior<()>) {
        self.state.lock().await.health_rule = Some(behavior);
    }

    /// Copy of every symbol search received, in arrival order.
    pub async fn search_requests(&self) -> Vec<SymbolSearchRequest> {
        self.state.lock().await.search_requests.clone()
    }

    /// Copy of every bars request received, in arrival order.
    pub async fn bars_requests(&self) -> Vec<BarsRequest> {
        self.state.lock().await.bars_requests.clone()
    }

    /// Copy of every pattern request received, in arrival order.
    pub async fn pattern_requests(&self) -> Vec<PatternRequest> {
        self.state.lock().await.pattern_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Calls with no configured behavior fail with `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn StockaiConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn StockaiConnector>, controller)
    }
}

impl StockaiConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl SymbolSearchProvider for DynamicMockConnector {
    async fn search_symbols(
        &self,
        req: SymbolSearchRequest,
    ) -> Result<Vec<SymbolInfo>, StockaiError> {
        // Snapshot the behavior without holding the lock across the await below
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.search_requests.push(req.clone());
            guard.search_rules.get(req.query()).cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Err(StockaiError::unsupported("symbol-search")),
        }
    }
}

#[async_trait]
impl BarsProvider for DynamicMockConnector {
    async fn bars(&self, req: BarsRequest) -> Result<Vec<Bar>, StockaiError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.bars_requests.push(req.clone());
            guard.bars_rules.get(req.symbol()).cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Err(StockaiError::unsupported("bars")),
        }
    }
}

#[async_trait]
impl PatternProvider for DynamicMockConnector {
    async fn patterns(&self, req: PatternRequest) -> Result<Vec<StockPattern>, StockaiError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.pattern_requests.push(req.clone());
            guard.pattern_rules.get(req.symbol()).cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Err(StockaiError::unsupported("patterns")),
        }
    }
}

#[async_trait]
impl HealthProvider for DynamicMockConnector {
    async fn health(&self) -> Result<(), StockaiError> {
        let behavior = self.state.lock().await.health_rule.clone();
        match behavior {
            Some(b) => b.run().await,
            None => Ok(()),
        }
    }
}
