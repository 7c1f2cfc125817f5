use chrono::{Duration, NaiveDate};

use crate::types::{StockPattern, StockaiError};

use super::decode::decode_date;

/// Patterns whose starting date lies within `max_age_days` before `today`.
///
/// # Errors
/// Returns `StockaiError::Data` if a starting date cannot be decoded.
pub fn recent_patterns(
    patterns: &[StockPattern],
    today: NaiveDate,
    max_age_days: u32,
) -> Result<Vec<StockPattern>, StockaiError> {
    let cutoff = today - Duration::days(i64::from(max_age_days));
    let mut kept = Vec::new();
    for p in patterns {
        if decode_date(p.starting_date)? >= cutoff {
            kept.push(p.clone());
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "stockai::pipeline",
        received = patterns.len(),
        kept = kept.len(),
        "filtered pattern matches by age"
    );
    Ok(kept)
}
