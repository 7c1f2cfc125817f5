use serde::{Deserialize, Serialize};

use crate::types::{Bar, StockaiError, Timeframe};

use super::change::pct_change;
use super::format::{format_date, format_time};
use super::order::SortedBars;
use super::ticks::tick_step;
use super::trend::TrendSummary;

fn fold_present(
    values: impl Iterator<Item = Option<f64>>,
    pick: fn(f64, f64) -> f64,
) -> Option<f64> {
    values.flatten().reduce(pick)
}

/// Header figures for the bars table.
///
/// Missing values are skipped rather than treated as zero, so an extreme is
/// `None` only when no bar carries that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStats {
    /// Number of bars loaded.
    pub total: usize,
    /// Highest `high`.
    pub max_high: Option<f64>,
    /// Lowest `low`.
    pub min_low: Option<f64>,
    /// Close of the newest bar.
    pub last_close: Option<f64>,
}

impl BarStats {
    /// Stats over `bars`; `None` when nothing is loaded.
    #[must_use]
    pub fn compute(bars: &SortedBars) -> Option<Self> {
        let newest = bars.newest_first();
        let latest = newest.first()?;
        Some(Self {
            total: newest.len(),
            max_high: fold_present(newest.iter().map(|b| b.high), f64::max),
            min_low: fold_present(newest.iter().map(|b| b.low), f64::min),
            last_close: latest.close,
        })
    }
}

/// Series and headline figures for the price and volume charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// X-axis labels, oldest first.
    pub labels: Vec<String>,
    /// Closing prices; missing closes plot as zero.
    pub closes: Vec<f64>,
    /// Volumes; missing volumes plot as zero.
    pub volumes: Vec<f64>,
    /// `first to last`, or the single label when there is one point.
    pub range_label: String,
    /// Number of points.
    pub bars_count: usize,
    /// Close of the oldest bar.
    pub first_close: Option<f64>,
    /// Close of the newest bar.
    pub last_close: Option<f64>,
    /// Close of the bar before the newest.
    pub prev_close: Option<f64>,
    /// Volume of the oldest bar.
    pub first_volume: Option<f64>,
    /// Volume of the newest bar.
    pub last_volume: Option<f64>,
    /// Mean of `volumes`.
    pub avg_volume: f64,
    /// Direction counts.
    pub trend: TrendSummary,
    /// Label stride for the x-axis.
    pub tick_step: usize,
    /// Timeframe the series was fetched with.
    pub timeframe: Timeframe,
}

impl ChartData {
    /// Build chart series from oldest-first bars.
    ///
    /// Intraday bars with a non-zero time get an ` HH:MM` suffix on their
    /// label. Returns `Ok(None)` for an empty input.
    ///
    /// # Errors
    /// Returns `StockaiError::Data` if a date or time key cannot be decoded.
    #[allow(clippy::cast_precision_loss)]
    pub fn build(
        oldest_first: &[Bar],
        timeframe: &Timeframe,
    ) -> Result<Option<Self>, StockaiError> {
        let (Some(first), Some(last)) = (oldest_first.first(), oldest_first.last()) else {
            return Ok(None);
        };

        let mut labels = Vec::with_capacity(oldest_first.len());
        for bar in oldest_first {
            let mut label = format_date(bar.date)?;
            if !timeframe.is_daily() && bar.time != 0 {
                label.push(' ');
                label.push_str(&format_time(bar.time)?);
            }
            labels.push(label);
        }

        let closes: Vec<f64> = oldest_first.iter().map(|b| b.close.unwrap_or(0.0)).collect();
        let volumes: Vec<f64> = oldest_first.iter().map(|b| b.volume.unwrap_or(0.0)).collect();
        let avg_volume = volumes.iter().sum::<f64>() / volumes.len() as f64;
        let prev_close = oldest_first
            .len()
            .checked_sub(2)
            .and_then(|i| oldest_first[i].close);

        let range_label = match labels.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, .., last] => format!("{first} to {last}"),
        };

        Ok(Some(Self {
            bars_count: labels.len(),
            tick_step: tick_step(labels.len()),
            range_label,
            labels,
            closes,
            volumes,
            first_close: first.close,
            last_close: last.close,
            prev_close,
            first_volume: first.volume,
            last_volume: last.volume,
            avg_volume,
            trend: TrendSummary::from_bars(oldest_first),
            timeframe: timeframe.clone(),
        }))
    }

    /// Change in close across the whole range.
    #[must_use]
    pub fn price_change(&self) -> Option<f64> {
        pct_change(self.last_close, self.first_close)
    }

    /// Change in volume across the whole range.
    #[must_use]
    pub fn volume_change(&self) -> Option<f64> {
        pct_change(self.last_volume, self.first_volume)
    }

    /// Change of the newest close against the previous bar.
    #[must_use]
    pub fn last_bar_change(&self) -> Option<f64> {
        pct_change(self.last_close, self.prev_close)
    }

    /// `days` for daily data, `bars` otherwise.
    #[must_use]
    pub const fn unit_label(&self) -> &'static str {
        if self.timeframe.is_daily() { "days" } else { "bars" }
    }
}

/// Y-axis bounds for a sparkline: `(min * 0.9, max * 1.1)`, with the lower
/// bound clamped at zero.
#[must_use]
pub fn sparkline_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let max = values.iter().copied().reduce(f64::max)?;
    let min = values.iter().copied().reduce(f64::min)?;
    Some(((min * 0.9).max(0.0), max * 1.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: i64, time: i64, close: Option<f64>, volume: Option<f64>) -> Bar {
        Bar {
            symbol: "T.US".into(),
            per: "5".into(),
            date,
            time,
            open: close,
            high: close,
            low: close,
            close,
            volume,
            openint: None,
            timeframe: Timeframe::FiveMinute,
        }
    }

    #[test]
    fn intraday_labels_carry_time() {
        let bars = vec![
            bar(20_240_102, 0, Some(1.0), None),
            bar(20_240_102, 93_500, Some(2.0), Some(10.0)),
        ];
        let chart = ChartData::build(&bars, &Timeframe::FiveMinute).unwrap().unwrap();
        assert_eq!(chart.labels, ["2024-01-02", "2024-01-02 09:35"]);
        assert_eq!(chart.volumes, [0.0, 10.0]);
        assert_eq!(chart.range_label, "2024-01-02 to 2024-01-02 09:35");
        assert_eq!(chart.unit_label(), "bars");
        assert_eq!(chart.price_change(), Some(100.0));
        assert_eq!(chart.volume_change(), None);
    }

    #[test]
    fn midnight_hour_times_label_without_failing() {
        let bars = vec![
            bar(20_240_103, 2_355, Some(1.0), Some(1.0)),
            bar(20_240_103, 3_000, Some(1.5), Some(1.0)),
            bar(20_240_103, 3_500, Some(2.0), Some(1.0)),
        ];
        let chart = ChartData::build(&bars, &Timeframe::FiveMinute).unwrap().unwrap();
        assert_eq!(
            chart.labels,
            ["2024-01-03 00:23", "2024-01-03 00:30", "2024-01-03 00:35"]
        );
    }

    #[test]
    fn sparkline_clamps_at_zero() {
        assert_eq!(sparkline_bounds(&[]), None);
        let (lo, hi) = sparkline_bounds(&[10.0, 20.0]).unwrap();
        assert!((lo - 9.0).abs() < 1e-9);
        assert!((hi - 22.0).abs() < 1e-9);
        let (lo, _) = sparkline_bounds(&[-5.0, 1.0]).unwrap();
        assert!(lo.abs() < f64::EPSILON);
    }
}
