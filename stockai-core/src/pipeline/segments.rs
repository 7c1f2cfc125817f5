use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{Bar, StockPattern, StockaiError};

use super::change::ChangeTag;
use super::decode::decode_date;

/// Open prices of one historical match and of the stretch that followed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSegments {
    /// First day of the matched segment.
    pub start: NaiveDate,
    /// `start + trend_length` days; closes the match and opens the follow-on.
    pub end: NaiveDate,
    /// `start + 2 * trend_length` days.
    pub follow_end: NaiveDate,
    /// Opens dated within `[start, end]`; missing opens plot as zero.
    pub trend: Vec<f64>,
    /// Opens dated within `[end, follow_end]`; missing opens plot as zero.
    pub follow_on: Vec<f64>,
    /// Similarity reported for the match.
    pub similarity_score: f64,
}

impl PatternSegments {
    /// `start to end` caption.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{} to {}", self.start, self.end)
    }

    /// Change from the first to the last open of the matched segment.
    #[must_use]
    pub fn trend_change(&self) -> ChangeTag {
        series_change(&self.trend)
    }

    /// Change from the first to the last open of the follow-on segment.
    #[must_use]
    pub fn follow_on_change(&self) -> ChangeTag {
        series_change(&self.follow_on)
    }
}

fn series_change(series: &[f64]) -> ChangeTag {
    ChangeTag::new(series.last().copied(), series.first().copied())
}

fn days(n: u32) -> Duration {
    Duration::days(i64::from(n))
}

/// Slice `bars` around a pattern match.
///
/// A bar dated exactly `start + trend_length` lands in both segments.
/// Input order is preserved, so pass bars oldest first.
///
/// # Errors
/// Returns `StockaiError::Data` if the starting date or a bar date cannot be
/// decoded.
pub fn pattern_segments(
    bars: &[Bar],
    pattern: &StockPattern,
    trend_length: u32,
) -> Result<PatternSegments, StockaiError> {
    let start = decode_date(pattern.starting_date)?;
    let end = start + days(trend_length);
    let follow_end = end + days(trend_length);

    let mut trend = Vec::new();
    let mut follow_on = Vec::new();
    for bar in bars {
        let d = decode_date(bar.date)?;
        let open = bar.open.unwrap_or(0.0);
        if (start..=end).contains(&d) {
            trend.push(open);
        }
        if (end..=follow_end).contains(&d) {
            follow_on.push(open);
        }
    }
    Ok(PatternSegments {
        start,
        end,
        follow_end,
        trend,
        follow_on,
        similarity_score: pattern.similarity_score,
    })
}

/// Start of the current trend: the newest bar's date minus `trend_length`
/// days. `None` when there are no bars.
///
/// # Errors
/// Returns `StockaiError::Data` if the newest bar date cannot be decoded.
pub fn current_trend_start(
    oldest_first: &[Bar],
    trend_length: u32,
) -> Result<Option<NaiveDate>, StockaiError> {
    oldest_first
        .last()
        .map(|b| Ok(decode_date(b.date)? - days(trend_length)))
        .transpose()
}

/// Open-price series for the price card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenSeries {
    /// Bar dates, oldest first.
    pub dates: Vec<NaiveDate>,
    /// Opens matching `dates`.
    pub opens: Vec<f64>,
    /// Newest open against the one before it, over all bars.
    pub change: ChangeTag,
}

/// Opens dated on or after `start`, skipping bars without an open.
///
/// The change tag compares the two newest bars regardless of `start`.
/// Returns `None` for an empty input.
///
/// # Errors
/// Returns `StockaiError::Data` if a bar date cannot be decoded.
pub fn open_series(
    oldest_first: &[Bar],
    start: NaiveDate,
) -> Result<Option<OpenSeries>, StockaiError> {
    let Some(last) = oldest_first.last() else {
        return Ok(None);
    };
    let prev = oldest_first
        .len()
        .checked_sub(2)
        .and_then(|i| oldest_first[i].open);

    let mut dates = Vec::new();
    let mut opens = Vec::new();
    for bar in oldest_first {
        let d = decode_date(bar.date)?;
        if let Some(open) = bar.open
            && d >= start
        {
            dates.push(d);
            opens.push(open);
        }
    }
    Ok(Some(OpenSeries {
        dates,
        opens,
        change: ChangeTag::new(last.open, prev),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timeframe;

    fn bar(date: i64, open: Option<f64>) -> Bar {
        Bar {
            symbol: "T.US".into(),
            per: "D".into(),
            date,
            time: 0,
            open,
            high: open,
            low: open,
            close: open,
            volume: None,
            openint: None,
            timeframe: Timeframe::Daily,
        }
    }

    #[test]
    fn trend_start_counts_calendar_days() {
        let bars = [bar(20_240_301, Some(1.0)), bar(20_240_305, Some(2.0))];
        assert_eq!(
            current_trend_start(&bars, 7).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 27)
        );
        assert_eq!(current_trend_start(&[], 7).unwrap(), None);
    }

    #[test]
    fn open_series_skips_missing_opens() {
        let bars = [
            bar(20_240_101, Some(5.0)),
            bar(20_240_102, None),
            bar(20_240_103, Some(8.0)),
            bar(20_240_104, Some(10.0)),
        ];
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let series = open_series(&bars, start).unwrap().unwrap();
        assert_eq!(series.opens, [8.0, 10.0]);
        assert_eq!(series.dates.len(), 2);
        assert_eq!(series.change.label, "+25.0%");
        assert!(open_series(&[], start).unwrap().is_none());
    }
}
