use chrono::NaiveDate;
use serde::Serialize;
use stockai_core::{
    Bar, BarStats, ChartData, DisplayOrder, Lookback, OpenSeries, Page, PatternSegments,
    StockPattern, StockaiError, SymbolInfo, Timeframe, current_trend_start, open_series, paginate,
    pattern_segments, window,
};

use crate::core::Dashboard;

/// Owned copy of one table page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<T> {
    /// Rows on this page.
    pub rows: Vec<T>,
    /// Zero-based page index after clamping.
    pub index: usize,
    /// Number of pages; at least one.
    pub page_count: usize,
    /// Rows across all pages.
    pub total: usize,
    /// A later page exists.
    pub has_next: bool,
    /// An earlier page exists.
    pub has_previous: bool,
}

impl<T> PageView<T> {
    fn from_page<S>(page: &Page<'_, S>, rows: Vec<T>) -> Self {
        Self {
            rows,
            index: page.index,
            page_count: page.page_count,
            total: page.total,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
        }
    }

    fn of(items: &[T], page_size: usize, index: usize) -> Self
    where
        T: Clone,
    {
        let page = paginate(items, page_size, index);
        Self::from_page(&page, page.items.to_vec())
    }

    fn try_map<S, E>(
        items: &[S],
        page_size: usize,
        index: usize,
        f: impl FnMut(&S) -> Result<T, E>,
    ) -> Result<Self, E> {
        let page = paginate(items, page_size, index);
        let rows = page.items.iter().map(f).collect::<Result<_, E>>()?;
        Ok(Self::from_page(&page, rows))
    }
}

/// Point-in-time copy of the view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Latest symbol search results.
    pub symbols: Vec<SymbolInfo>,
    /// Selected ticker.
    pub selected: Option<String>,
    /// Loaded bars in display order.
    pub bars: Vec<Bar>,
    /// Current display order.
    pub display_order: DisplayOrder,
    /// Timeframe used for the next load.
    pub timeframe: Timeframe,
    /// Inclusive start of the next load.
    pub start: Option<NaiveDate>,
    /// Inclusive end of the next load.
    pub end: Option<NaiveDate>,
    /// Bar limit used for the next load.
    pub limit: u32,
    /// Recent pattern matches for the selection.
    pub patterns: Vec<StockPattern>,
    /// Any fetch in flight.
    pub loading: bool,
    /// Message of the last failure, cleared when a new fetch starts.
    pub error: Option<String>,
}

impl Dashboard {
    /// Copy the current view state.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let s = self.state.lock().await;
        DashboardSnapshot {
            symbols: s.symbols.clone(),
            selected: s.selected.clone(),
            bars: s.bars.displayed(s.display_order).to_vec(),
            display_order: s.display_order,
            timeframe: s.timeframe.clone(),
            start: s.start,
            end: s.end,
            limit: s.limit,
            patterns: s.patterns.clone(),
            loading: s.loading(),
            error: s.error.clone(),
        }
    }

    /// Header stats for the bars table; `None` when nothing is loaded.
    pub async fn stats(&self) -> Option<BarStats> {
        BarStats::compute(&self.state.lock().await.bars)
    }

    /// Chart series over every loaded bar, oldest first.
    ///
    /// # Errors
    /// Returns `Data` if a loaded bar has an undecodable date or time.
    pub async fn chart_data(&self) -> Result<Option<ChartData>, StockaiError> {
        let s = self.state.lock().await;
        ChartData::build(s.bars.oldest_first(), &s.loaded_timeframe)
    }

    /// Chart series restricted to a lookback window ending at `today`.
    ///
    /// # Errors
    /// Returns `Data` if a loaded bar has an undecodable date or time.
    pub async fn chart_window(
        &self,
        lookback: Lookback,
        today: NaiveDate,
    ) -> Result<Option<ChartData>, StockaiError> {
        let s = self.state.lock().await;
        let kept = window(s.bars.oldest_first(), lookback, today)?;
        ChartData::build(&kept, &s.loaded_timeframe)
    }

    /// One page of the bars table in the current display order.
    pub async fn bars_page(&self, index: usize) -> PageView<Bar> {
        let s = self.state.lock().await;
        PageView::of(
            s.bars.displayed(s.display_order),
            self.cfg.bars_page_size,
            index,
        )
    }

    /// One page of the pattern table.
    pub async fn patterns_page(&self, index: usize) -> PageView<StockPattern> {
        let s = self.state.lock().await;
        PageView::of(&s.patterns, self.cfg.patterns_page_size, index)
    }

    /// One page of pattern matches with the open prices around each one.
    ///
    /// # Errors
    /// Returns `Data` if a starting date or bar date cannot be decoded.
    pub async fn pattern_segments_page(
        &self,
        index: usize,
    ) -> Result<PageView<PatternSegments>, StockaiError> {
        let s = self.state.lock().await;
        let bars = s.bars.oldest_first();
        PageView::try_map(&s.patterns, self.cfg.patterns_page_size, index, |p| {
            pattern_segments(bars, p, self.cfg.pattern_trend_length)
        })
    }

    /// Start of the trend the pattern matches are compared against.
    ///
    /// # Errors
    /// Returns `Data` if the newest bar date cannot be decoded.
    pub async fn current_trend_start(&self) -> Result<Option<NaiveDate>, StockaiError> {
        let s = self.state.lock().await;
        current_trend_start(s.bars.oldest_first(), self.cfg.pattern_trend_length)
    }

    /// Open-price series for the price card over a lookback window.
    ///
    /// # Errors
    /// Returns `Data` if a loaded bar has an undecodable date.
    pub async fn open_series(
        &self,
        lookback: Lookback,
        today: NaiveDate,
    ) -> Result<Option<OpenSeries>, StockaiError> {
        let s = self.state.lock().await;
        let bars = s.bars.oldest_first();
        let Some(start) = lookback.start(bars, today)? else {
            return Ok(None);
        };
        open_series(bars, start)
    }
}
