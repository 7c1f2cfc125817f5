//! Validated request types and their query-string encodings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{SortOrder, StockaiError, Timeframe};

fn non_empty(field: &str, value: &str) -> Result<String, StockaiError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(StockaiError::InvalidArg(format!("{field} must not be empty")));
    }
    Ok(v.to_string())
}

fn yyyymmdd(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

/// Symbol lookup by (case-insensitive) ticker prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSearchRequest {
    query: String,
    limit: u32,
}

impl SymbolSearchRequest {
    /// Default number of results requested.
    pub const DEFAULT_LIMIT: u32 = 25;
    /// Upper bound the backend accepts for `/api/symbols?limit=`.
    pub const MAX_LIMIT: u32 = 500;

    /// Build a search for `query` (trimmed) with the default limit.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the trimmed query is empty.
    pub fn new(query: &str) -> Result<Self, StockaiError> {
        Ok(Self {
            query: non_empty("query", query)?,
            limit: Self::DEFAULT_LIMIT,
        })
    }

    /// Set the number of results requested.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `limit` is outside `1..=500`.
    pub fn with_limit(mut self, limit: u32) -> Result<Self, StockaiError> {
        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(StockaiError::InvalidArg(format!(
                "search limit must be within 1..={}, got {limit}",
                Self::MAX_LIMIT
            )));
        }
        self.limit = limit;
        Ok(self)
    }

    /// Trimmed query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Requested result count.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Query-string pairs in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("q", self.query.clone()), ("limit", self.limit.to_string())]
    }
}

/// Historical bar request. Optional fields are omitted from the wire when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarsRequest {
    symbol: String,
    timeframe: Timeframe,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    limit: Option<u32>,
    order: Option<SortOrder>,
}

impl BarsRequest {
    /// Upper bound the backend accepts for `/api/bars?limit=`.
    pub const MAX_LIMIT: u32 = 50_000;

    /// Start building a request for `symbol`.
    pub fn builder(symbol: impl Into<String>) -> BarsRequestBuilder {
        BarsRequestBuilder {
            symbol: symbol.into(),
            timeframe: Timeframe::Daily,
            start: None,
            end: None,
            limit: None,
            order: None,
        }
    }

    /// Ticker being requested.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Requested timeframe.
    #[must_use]
    pub const fn timeframe(&self) -> &Timeframe {
        &self.timeframe
    }

    /// Inclusive first date, if bounded.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Inclusive last date, if bounded.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Maximum number of bars, if capped.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Server-side order, if requested.
    #[must_use]
    pub const fn order(&self) -> Option<SortOrder> {
        self.order
    }

    /// Query-string pairs; unset optional fields are omitted entirely.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbol", self.symbol.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
        ];
        if let Some(d) = self.start {
            pairs.push(("start", yyyymmdd(d)));
        }
        if let Some(d) = self.end {
            pairs.push(("end", yyyymmdd(d)));
        }
        if let Some(l) = self.limit {
            pairs.push(("limit", l.to_string()));
        }
        if let Some(o) = self.order {
            pairs.push(("order", o.as_str().to_string()));
        }
        pairs
    }
}

/// Builder for [`BarsRequest`].
#[derive(Debug, Clone)]
pub struct BarsRequestBuilder {
    symbol: String,
    timeframe: Timeframe,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    limit: Option<u32>,
    order: Option<SortOrder>,
}

impl BarsRequestBuilder {
    /// Set the timeframe (defaults to daily).
    #[must_use]
    pub fn timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    /// Set the inclusive first date.
    #[must_use]
    pub const fn start(mut self, start: Option<NaiveDate>) -> Self {
        self.start = start;
        self
    }

    /// Set the inclusive last date.
    #[must_use]
    pub const fn end(mut self, end: Option<NaiveDate>) -> Self {
        self.end = end;
        self
    }

    /// Cap the number of bars returned.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Ask the server to sort before transmission.
    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty symbol, an inverted date range or a
    /// limit outside `1..=50000`.
    pub fn build(self) -> Result<BarsRequest, StockaiError> {
        let symbol = non_empty("symbol", &self.symbol)?;
        if let (Some(s), Some(e)) = (self.start, self.end)
            && s > e
        {
            return Err(StockaiError::InvalidArg(format!(
                "start {s} is after end {e}"
            )));
        }
        if let Some(l) = self.limit
            && !(1..=BarsRequest::MAX_LIMIT).contains(&l)
        {
            return Err(StockaiError::InvalidArg(format!(
                "bars limit must be within 1..={}, got {l}",
                BarsRequest::MAX_LIMIT
            )));
        }
        Ok(BarsRequest {
            symbol,
            timeframe: self.timeframe,
            start: self.start,
            end: self.end,
            limit: self.limit,
            order: self.order,
        })
    }
}

/// Pattern recognition request for `/api/getPatterns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRequest {
    symbol: String,
    timeframe: Timeframe,
    trend_length: u32,
    similarity_score: u32,
}

impl PatternRequest {
    /// Default length of the trend segment, in bars.
    pub const DEFAULT_TREND_LENGTH: u32 = 7;
    /// Default minimum similarity score.
    pub const DEFAULT_SIMILARITY_SCORE: u32 = 80;

    /// Daily pattern request for `symbol` with default parameters.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the trimmed symbol is empty.
    pub fn new(symbol: &str) -> Result<Self, StockaiError> {
        Ok(Self {
            symbol: non_empty("symbol", symbol)?,
            timeframe: Timeframe::Daily,
            trend_length: Self::DEFAULT_TREND_LENGTH,
            similarity_score: Self::DEFAULT_SIMILARITY_SCORE,
        })
    }

    /// Override the trend segment length.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero length.
    pub fn with_trend_length(mut self, trend_length: u32) -> Result<Self, StockaiError> {
        if trend_length == 0 {
            return Err(StockaiError::InvalidArg(
                "trend_length must be positive".into(),
            ));
        }
        self.trend_length = trend_length;
        Ok(self)
    }

    /// Override the minimum similarity score.
    #[must_use]
    pub const fn with_similarity_score(mut self, similarity_score: u32) -> Self {
        self.similarity_score = similarity_score;
        self
    }

    /// Ticker being analysed.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Trend segment length.
    #[must_use]
    pub const fn trend_length(&self) -> u32 {
        self.trend_length
    }

    /// Minimum similarity score.
    #[must_use]
    pub const fn similarity_score(&self) -> u32 {
        self.similarity_score
    }

    /// Query-string pairs in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", self.symbol.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
            ("trend_length", self.trend_length.to_string()),
            ("similarity_score", self.similarity_score.to_string()),
        ]
    }
}
