use crate::types::StockaiError;

use super::decode::{decode_date, decode_time};

const UNAVAILABLE: &str = "N/A";

/// Render a `YYYYMMDD` key as `YYYY-MM-DD`.
///
/// # Errors
/// Propagates [`decode_date`] failures.
pub fn format_date(value: i64) -> Result<String, StockaiError> {
    Ok(decode_date(value)?.format("%Y-%m-%d").to_string())
}

/// Render a time key as `HH:MM`.
///
/// # Errors
/// Propagates [`decode_time`] failures.
pub fn format_time(value: i64) -> Result<String, StockaiError> {
    Ok(decode_time(value)?.format("%H:%M").to_string())
}

/// Price cell: two decimals, `N/A` when absent.
#[must_use]
pub fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), |v| format!("{v:.2}"))
}

/// Volume cell: whole units, `N/A` when absent.
#[must_use]
pub fn format_volume(value: Option<f64>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), |v| format!("{v:.0}"))
}

/// Compact magnitude with a `K`/`M`/`B` suffix and one decimal.
///
/// Values below one thousand keep two decimals.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(format_date(20_240_105).unwrap(), "2024-01-05");
        assert_eq!(format_time(93_000).unwrap(), "09:30");
        assert_eq!(format_time(3000).unwrap(), "00:30");
        assert_eq!(format_time(153_000).unwrap(), "15:30");
        assert_eq!(format_price(Some(187.456)), "187.46");
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_volume(Some(1_234_567.0)), "1234567");
        assert_eq!(format_volume(None), "N/A");
    }

    #[test]
    fn compact_suffixes() {
        assert_eq!(format_compact(2_500_000_000.0), "2.5B");
        assert_eq!(format_compact(12_340_000.0), "12.3M");
        assert_eq!(format_compact(4_200.0), "4.2K");
        assert_eq!(format_compact(999.0), "999.00");
        assert_eq!(format_compact(-1_500.0), "-1.5K");
    }
}
