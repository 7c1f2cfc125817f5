//! Stockai data transfer objects and configuration primitives.
//!
//! Everything here mirrors the JSON shapes served by the market-data API
//! (`/api/symbols`, `/api/bars`, `/api/getPatterns`) plus the request,
//! configuration and error types shared by the connectors and the dashboard.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod market;
mod requests;

pub use capability::Capability;
pub use config::{ApiBase, ClientConfig, DashboardConfig, API_BASE_ENV, FALLBACK_API_BASE};
pub use error::StockaiError;
pub use market::{
    Bar, DisplayOrder, Envelope, HealthStatus, SortOrder, StockPattern, SymbolInfo, Timeframe,
};
pub use requests::{BarsRequest, BarsRequestBuilder, PatternRequest, SymbolSearchRequest};
