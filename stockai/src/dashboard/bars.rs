use chrono::NaiveDate;
use stockai_core::{
    BarsRequest, Capability, DisplayOrder, SortedBars, StockaiError, Timeframe,
};

use crate::core::{Dashboard, Fetch};

impl Dashboard {
    /// Select `symbol` and load its bars with the current parameters.
    ///
    /// Behavior:
    /// - Clears the bar set and the last error before the request goes out,
    ///   so a failure leaves an empty table.
    /// - Sends the current timeframe, date range and limit, plus the wire
    ///   order matching the current display order.
    /// - Applies the response only if no newer bar load was issued since.
    ///
    /// Returns the number of bars applied.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty symbol, `Unsupported` if the
    /// connector serves no bars, or the connector's error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "stockai::dashboard", skip(self))
    )]
    pub async fn load_bars(&self, symbol: &str) -> Result<Fetch<usize>, StockaiError> {
        let provider = self
            .connector
            .as_bars_provider()
            .ok_or_else(|| StockaiError::unsupported(Capability::Bars.as_str()))?;

        let (req, generation) = {
            let mut s = self.state.lock().await;
            let req = BarsRequest::builder(symbol)
                .timeframe(s.timeframe.clone())
                .start(s.start)
                .end(s.end)
                .limit(s.limit)
                .order(s.display_order.wire_order())
                .build()?;
            s.selected = Some(req.symbol().to_string());
            s.bars = SortedBars::default();
            s.patterns.clear();
            // Pattern loads for the previous selection must not land.
            s.generations.patterns += 1;
            s.loading_patterns = false;
            s.error = None;
            s.loading_bars = true;
            s.generations.bars += 1;
            (req, s.generations.bars)
        };

        let timeframe = req.timeframe().clone();
        let result = self
            .call_with_timeout(Capability::Bars, provider.bars(req))
            .await;

        let mut s = self.state.lock().await;
        if s.generations.bars != generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "stockai::dashboard", generation, "discarding superseded bars");
            return Ok(Fetch::Superseded);
        }
        s.loading_bars = false;
        match result {
            Ok(bars) => {
                s.bars = SortedBars::new(bars);
                s.loaded_timeframe = timeframe;
                Ok(Fetch::Applied(s.bars.len()))
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "stockai::dashboard", error = %e, "bar load failed");
                s.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Raise the bar limit by one step (capped) and reload the selected symbol.
    ///
    /// Skipped when nothing is selected or the limit is already at its ceiling.
    ///
    /// # Errors
    /// Same as [`Dashboard::load_bars`].
    pub async fn load_more_bars(&self) -> Result<Fetch<usize>, StockaiError> {
        let symbol = {
            let mut s = self.state.lock().await;
            let Some(symbol) = s.selected.clone() else {
                return Ok(Fetch::Skipped);
            };
            let next = s
                .limit
                .saturating_add(self.cfg.bars_limit_step)
                .min(self.cfg.max_bars_limit);
            if next == s.limit {
                return Ok(Fetch::Skipped);
            }
            s.limit = next;
            symbol
        };
        self.load_bars(&symbol).await
    }

    /// Switch between newest-first and oldest-first display.
    ///
    /// The loaded bars are already held in both orders, so this never
    /// issues a request.
    pub async fn set_display_order(&self, order: DisplayOrder) {
        self.state.lock().await.display_order = order;
    }

    /// Timeframe for the next bar load.
    pub async fn set_timeframe(&self, timeframe: Timeframe) {
        self.state.lock().await.timeframe = timeframe;
    }

    /// Inclusive date range for the next bar load; `None` leaves a side open.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is after `end`; the previous range is kept.
    pub async fn set_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), StockaiError> {
        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(StockaiError::InvalidArg(format!(
                "start {s} is after end {e}"
            )));
        }
        let mut s = self.state.lock().await;
        s.start = start;
        s.end = end;
        Ok(())
    }
}
