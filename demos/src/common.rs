use std::sync::Arc;

use chrono::NaiveDate;
use stockai::{Dashboard, StockaiConnector, StockaiError};
use stockai_mock::MockConnector;

/// Environment switch that runs the demos against fixture data.
pub const USE_MOCK_ENV: &str = "STOCKAI_DEMOS_USE_MOCK";

fn use_mock() -> bool {
    std::env::var(USE_MOCK_ENV).is_ok()
}

/// Return a connector for the demos.
///
/// # Errors
/// Returns `InvalidArg` if `STOCKAI_API_BASE` is not an absolute http(s) URL.
pub fn get_connector() -> Result<Arc<dyn StockaiConnector>, StockaiError> {
    if use_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(MockConnector::new()))
    } else {
        Ok(Arc::new(stockai_http::HttpConnector::from_env()?))
    }
}

/// Build a dashboard over [`get_connector`].
///
/// # Errors
/// Propagates connector construction and builder validation errors.
pub fn dashboard() -> Result<Dashboard, StockaiError> {
    Dashboard::builder().with_connector(get_connector()?).build()
}

/// Reference date for lookback windows and pattern recency.
///
/// Fixture data ends on a fixed trading day, so the mock pins "today" there.
#[must_use]
pub fn today() -> NaiveDate {
    if use_mock() {
        MockConnector::last_trading_day()
    } else {
        chrono::Local::now().date_naive()
    }
}
