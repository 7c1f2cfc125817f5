use std::sync::Arc;

use stockai::{Dashboard, DashboardConfig, StockaiError};
use stockai_mock::MockConnector;

#[test]
fn build_requires_a_connector() {
    let err = Dashboard::builder().build().err().unwrap();
    assert!(matches!(err, StockaiError::InvalidArg(_)));
}

#[test]
fn defaults_follow_dashboard_config() {
    let dash = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    assert_eq!(dash.config(), &DashboardConfig::default());
    assert_eq!(dash.config().search_limit, 30);
    assert_eq!(dash.config().bars_page_size, 50);
}

#[test]
fn inconsistent_limits_are_rejected() {
    let err = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .bars_limits(600, 200, 500)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, StockaiError::InvalidArg(_)));

    let err = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .page_sizes(0, 10)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, StockaiError::InvalidArg(_)));
}

#[test]
fn limits_beyond_request_bounds_fail_at_build() {
    let err = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .search_limit(501)
        .build()
        .err()
        .unwrap();
    assert!(err.to_string().contains("search limit 501"));

    let err = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .bars_limits(200, 200, 50_001)
        .build()
        .err()
        .unwrap();
    assert!(err.to_string().contains("max bars limit 50001"));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .search_limit(500)
        .bars_limits(200, 200, 50_000)
        .build();
    assert!(dash.is_ok());
}

#[test]
fn config_round_trips_partial_json() {
    let cfg: DashboardConfig = serde_json::from_str(r#"{"bars_page_size": 25}"#).unwrap();
    assert_eq!(cfg.bars_page_size, 25);
    assert_eq!(cfg.max_bars_limit, 5000);
}
