use core::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{Bar, StockaiError};

use super::decode::decode_date;

/// Named lookback window for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lookback {
    /// Seven days.
    Week1,
    /// Thirty days.
    #[default]
    Month1,
    /// Ninety days.
    Month3,
    /// 183 days.
    Month6,
    /// 365 days.
    Year1,
    /// 1825 days.
    Year5,
    /// From the earliest loaded bar.
    AllTime,
}

impl Lookback {
    /// Every window, shortest first.
    pub const ALL: [Self; 7] = [
        Self::Week1,
        Self::Month1,
        Self::Month3,
        Self::Month6,
        Self::Year1,
        Self::Year5,
        Self::AllTime,
    ];

    /// Length in days; `None` for [`Lookback::AllTime`].
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Week1 => Some(7),
            Self::Month1 => Some(30),
            Self::Month3 => Some(90),
            Self::Month6 => Some(183),
            Self::Year1 => Some(365),
            Self::Year5 => Some(1825),
            Self::AllTime => None,
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week1 => "1 Week",
            Self::Month1 => "1 Month",
            Self::Month3 => "3 Months",
            Self::Month6 => "6 Months",
            Self::Year1 => "1 Year",
            Self::Year5 => "5 Years",
            Self::AllTime => "All Time",
        }
    }

    /// First date included by this window.
    ///
    /// Fixed windows start `days` before `today`. `AllTime` starts at the
    /// earliest bar date, or `None` when there are no bars.
    ///
    /// # Errors
    /// Returns `StockaiError::Data` if a bar date cannot be decoded.
    pub fn start(
        self,
        bars: &[Bar],
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, StockaiError> {
        match self.days() {
            Some(days) => Ok(Some(today - Duration::days(days))),
            None => {
                let mut earliest: Option<NaiveDate> = None;
                for bar in bars {
                    let d = decode_date(bar.date)?;
                    earliest = Some(earliest.map_or(d, |e| e.min(d)));
                }
                Ok(earliest)
            }
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Lookback {
    type Err = StockaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.label().to_ascii_lowercase() == norm)
            .ok_or_else(|| StockaiError::InvalidArg(format!("unknown lookback '{s}'")))
    }
}

/// Bars whose date falls within `[start, today]` for `lookback`.
///
/// Input order is preserved.
///
/// # Errors
/// Returns `StockaiError::Data` if any bar date cannot be decoded.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "stockai::pipeline",
        skip(bars),
        fields(count = bars.len()),
    )
)]
pub fn window(
    bars: &[Bar],
    lookback: Lookback,
    today: NaiveDate,
) -> Result<Vec<Bar>, StockaiError> {
    let Some(start) = lookback.start(bars, today)? else {
        return Ok(Vec::new());
    };
    let mut kept = Vec::new();
    for bar in bars {
        let d = decode_date(bar.date)?;
        if d >= start && d <= today {
            kept.push(bar.clone());
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels() {
        assert_eq!("3 months".parse::<Lookback>().unwrap(), Lookback::Month3);
        assert_eq!(" All Time ".parse::<Lookback>().unwrap(), Lookback::AllTime);
        assert!("2 weeks".parse::<Lookback>().is_err());
    }

    #[test]
    fn fixed_start_is_days_before_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let start = Lookback::Month3.start(&[], today).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1));
    }
}
