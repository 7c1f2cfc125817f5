use serde::{Deserialize, Serialize};

use crate::types::Bar;

/// Direction of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Closed above the open.
    Up,
    /// Closed below the open.
    Down,
    /// Closed at the open.
    Flat,
}

/// Classify a bar by comparing close to open.
///
/// Bars with a missing open or close are unclassifiable and return `None`.
#[must_use]
pub fn classify(bar: &Bar) -> Option<Trend> {
    let (open, close) = (bar.open?, bar.close?);
    Some(if close > open {
        Trend::Up
    } else if close < open {
        Trend::Down
    } else {
        Trend::Flat
    })
}

/// Up/down/flat counts over a set of bars.
///
/// `total` counts only classifiable bars, so `up + down + flat == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Bars that closed higher.
    pub up: usize,
    /// Bars that closed lower.
    pub down: usize,
    /// Bars that closed unchanged.
    pub flat: usize,
    /// Classifiable bars.
    pub total: usize,
}

impl TrendSummary {
    /// Count the classifiable bars in `bars`.
    pub fn from_bars<'a, I>(bars: I) -> Self
    where
        I: IntoIterator<Item = &'a Bar>,
    {
        let mut s = Self::default();
        for trend in bars.into_iter().filter_map(classify) {
            match trend {
                Trend::Up => s.up += 1,
                Trend::Down => s.down += 1,
                Trend::Flat => s.flat += 1,
            }
            s.total += 1;
        }
        s
    }

    /// Share of bars in `trend` as a percentage; `0.0` when nothing is classifiable.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, trend: Trend) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = match trend {
            Trend::Up => self.up,
            Trend::Down => self.down,
            Trend::Flat => self.flat,
        };
        n as f64 / self.total as f64 * 100.0
    }

    /// Up share rounded to the nearest whole percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn up_percent(&self) -> u32 {
        self.share(Trend::Up).round() as u32
    }
}
