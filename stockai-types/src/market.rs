//! Wire shapes for symbols, bars and pattern matches.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::StockaiError;

/// One row of a symbol search result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolInfo {
    /// Ticker, e.g. `AAPL.US`. Unique within one result set.
    pub symbol: String,
    /// Listing exchange, lowercase as stored by the backend.
    pub exchange: Option<String>,
    /// Asset type (`stocks`, `etfs`, ...).
    pub asset_type: Option<String>,
    /// Country directory the symbol was imported from.
    pub country: Option<String>,
}

impl SymbolInfo {
    /// Build a result with only the ticker populated.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: None,
            asset_type: None,
            country: None,
        }
    }

    /// Caption shown under the ticker: `EXCHANGE | asset type`.
    #[must_use]
    pub fn caption(&self) -> String {
        let exchange = self
            .exchange
            .as_deref()
            .map_or_else(|| "N/A".to_string(), str::to_uppercase);
        let asset = self.asset_type.as_deref().unwrap_or("asset");
        format!("{exchange} | {asset}")
    }
}

/// Sampling granularity of a bar series.
///
/// Serialized as the backend's strings (`daily`, `5 min`); anything else is
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeframe {
    /// One bar per trading day.
    #[default]
    Daily,
    /// Five-minute intraday bars.
    FiveMinute,
    /// Any other timeframe label the server reports.
    Other(String),
}

impl Timeframe {
    /// Wire label of this timeframe.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "daily",
            Self::FiveMinute => "5 min",
            Self::Other(s) => s,
        }
    }

    /// Human label used in captions (`Daily`, `5 Minute`).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Daily => "Daily",
            Self::FiveMinute => "5 Minute",
            Self::Other(s) => s,
        }
    }

    /// True for the daily timeframe.
    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily)
    }
}

impl From<String> for Timeframe {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "5 min" => Self::FiveMinute,
            _ => Self::Other(s),
        }
    }
}

impl From<Timeframe> for String {
    fn from(t: Timeframe) -> Self {
        match t {
            Timeframe::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One OHLCV record as served by `/api/bars`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Ticker this bar belongs to.
    pub symbol: String,
    /// Period code from the source file (`D`, `5`).
    pub per: String,
    /// Trading date as a `YYYYMMDD` integer.
    pub date: i64,
    /// Bar time as `HHMMSS` (or `HHMM`); zero for daily bars.
    pub time: i64,
    /// Opening price.
    pub open: Option<f64>,
    /// High price.
    pub high: Option<f64>,
    /// Low price.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<f64>,
    /// Open interest (futures only).
    pub openint: Option<f64>,
    /// Timeframe of the series.
    pub timeframe: Timeframe,
}

impl Bar {
    /// Uniqueness key within a symbol's series.
    #[must_use]
    pub fn key(&self) -> (&str, i64, i64) {
        (&self.symbol, self.date, self.time)
    }
}

/// One match returned by the pattern recognition endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPattern {
    /// First trading date of the matching segment, `YYYYMMDD`.
    pub starting_date: i64,
    /// Similarity reported by the backend; higher is closer.
    pub similarity_score: f64,
}

/// `{ "results": [...] }` envelope used by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload rows.
    pub results: Vec<T>,
}

/// Body of `/api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `ok` when the backend is serving.
    pub status: String,
}

/// Server-side sort direction for `/api/bars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = StockaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(StockaiError::InvalidArg(format!(
                "order must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

/// Order in which the bars table is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Most recent bar first.
    #[default]
    Newest,
    /// Earliest bar first.
    Oldest,
}

impl DisplayOrder {
    /// Server-side order that produces this display order without re-sorting.
    #[must_use]
    pub const fn wire_order(self) -> SortOrder {
        match self {
            Self::Newest => SortOrder::Desc,
            Self::Oldest => SortOrder::Asc,
        }
    }
}
