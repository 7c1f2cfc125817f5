//! Bar transform pipeline.
//!
//! Every function here is a pure, single-pass transformation over bars that
//! were already fetched:
//! - `order`: canonical newest-first sort and its exact reverse
//! - `decode`: `YYYYMMDD` / `HHMMSS` integer keys to calendar values
//! - `format`: table cell and caption formatting
//! - `change`: percentage change and its display tag
//! - `trend`: up/down/flat classification
//! - `window`: named lookback windows
//! - `paginate`: fixed-size table pages
//! - `ticks`: x-axis label thinning
//! - `summary`: table header stats and chart series
//! - `patterns`: recency filter for pattern matches
//! - `segments`: open-price slices around pattern matches

/// Percentage change helpers.
pub mod change;
/// Integer date/time key decoding.
pub mod decode;
/// Display formatting for table cells and captions.
pub mod format;
/// Canonical bar ordering.
pub mod order;
/// Table pagination.
pub mod paginate;
/// Pattern match filtering.
pub mod patterns;
/// Open-price series for pattern matches and the price card.
pub mod segments;
/// Derived aggregates for the table header and charts.
pub mod summary;
/// Axis tick thinning.
pub mod ticks;
/// Up/down/flat classification.
pub mod trend;
/// Lookback windows.
pub mod window;

pub use change::{ChangeTag, Tone, pct_change};
pub use decode::{decode_date, decode_date_utc, decode_time, encode_date};
pub use format::{format_compact, format_date, format_price, format_time, format_volume};
pub use order::SortedBars;
pub use paginate::{Page, paginate};
pub use patterns::recent_patterns;
pub use segments::{
    OpenSeries, PatternSegments, current_trend_start, open_series, pattern_segments,
};
pub use summary::{BarStats, ChartData, sparkline_bounds};
pub use ticks::{is_tick, thin_labels, tick_step};
pub use trend::{Trend, TrendSummary, classify};
pub use window::{Lookback, window};
