//! Re-export of foundational types from `stockai-types`.
// Consolidated re-exports so downstream crates can depend on `stockai-core` only

pub use stockai_types::{Capability, StockaiError};

pub use stockai_types::{API_BASE_ENV, ApiBase, ClientConfig, DashboardConfig, FALLBACK_API_BASE};

pub use stockai_types::{
    Bar, DisplayOrder, Envelope, HealthStatus, SortOrder, StockPattern, SymbolInfo, Timeframe,
};

pub use stockai_types::{BarsRequest, BarsRequestBuilder, PatternRequest, SymbolSearchRequest};
