//! stockai-core
//!
//! Core types, traits, and the bar transform pipeline shared across the
//! stockai crates.
//!
//! - `types`: re-exported DTOs, requests, config and the error enum.
//! - `connector`: the `StockaiConnector` trait and capability role traits.
//! - `pipeline`: pure functions that order, window, paginate and summarize a
//!   fetched bar collection for display.
//!
//! Nothing in `pipeline` performs I/O or holds state; the same input always
//! yields the same output, so the dashboard simply recomputes on every change.
#![warn(missing_docs)]

/// Connector capability traits and the primary `StockaiConnector` interface.
pub mod connector;
/// Pure transforms from fetched bars to display records.
pub mod pipeline;
pub mod types;

pub use connector::StockaiConnector;
pub use pipeline::{
    BarStats, ChangeTag, ChartData, Lookback, OpenSeries, Page, PatternSegments, SortedBars, Tone,
    Trend, TrendSummary, classify, current_trend_start, decode_date, decode_date_utc,
    decode_time, encode_date, format_compact, format_date, format_price, format_time,
    format_volume, is_tick, open_series, paginate, pattern_segments, pct_change,
    recent_patterns, sparkline_bounds, thin_labels, tick_step, window,
};
pub use types::*;
