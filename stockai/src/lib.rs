//! stockai drives a market-data dashboard on top of any `StockaiConnector`.
//!
//! Overview
//! - Searches symbols, loads bar history and pattern matches through the
//!   connector's role traits.
//! - Keeps the view state (results, selection, bars, display order, limit,
//!   loading flag, last error) behind an async mutex so fetches can overlap.
//! - Derives everything the UI shows (table pages, header stats, chart
//!   series, lookback windows) through the pure `stockai_core::pipeline`.
//!
//! Key behaviors
//! - Overlapping fetches of the same kind resolve as latest-issued-wins: a
//!   response that arrives after a newer request was issued is discarded and
//!   reported as [`Fetch::Superseded`].
//! - Loading bars clears the previous set before the request goes out, so a
//!   failure leaves an empty table rather than stale rows.
//! - Switching between newest-first and oldest-first is a local reversal and
//!   never issues a request.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockai::{Dashboard, Lookback};
//! use stockai_http::HttpConnector;
//!
//! let http = Arc::new(HttpConnector::from_env()?);
//! let dash = Dashboard::builder().with_connector(http).build()?;
//!
//! dash.search("aa").await?;
//! dash.load_bars("AAPL.US").await?;
//! let page = dash.bars_page(0).await;
//! let chart = dash.chart_window(Lookback::Month3, chrono::Local::now().date_naive()).await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod dashboard;

pub use core::{Dashboard, DashboardBuilder, Fetch};
pub use dashboard::view::{DashboardSnapshot, PageView};

// Re-export core types for convenience
pub use stockai_core::{
    Bar, BarStats, BarsRequest, Capability, ChangeTag, ChartData, ClientConfig, DashboardConfig,
    DisplayOrder, Lookback, OpenSeries, PatternSegments, SortOrder, StockPattern,
    StockaiConnector, StockaiError, SymbolInfo, Timeframe, Tone, Trend, TrendSummary,
};
