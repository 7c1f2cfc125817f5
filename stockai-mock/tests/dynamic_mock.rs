use std::time::Duration;

use stockai_core::{
    Bar, BarsRequest, PatternRequest, StockaiError, SymbolInfo, SymbolSearchRequest, Timeframe,
};
use stockai_mock::{DynamicMockConnector, MockBehavior};

fn bar(date: i64) -> Bar {
    Bar {
        symbol: "AAPL.US".into(),
        per: "D".into(),
        date,
        time: 0,
        open: Some(1.0),
        high: Some(1.0),
        low: Some(1.0),
        close: Some(1.0),
        volume: Some(1.0),
        openint: None,
        timeframe: Timeframe::Daily,
    }
}

#[tokio::test]
async fn test_mock_bars_return() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller
        .set_bars_behavior("AAPL.US", MockBehavior::Return(vec![bar(20_240_102)]))
        .await;

    let bp = mock.as_bars_provider().expect("bars provider");
    let got = bp
        .bars(BarsRequest::builder("AAPL.US").build().unwrap())
        .await
        .expect("bars ok");
    assert_eq!(got, vec![bar(20_240_102)]);
    assert_eq!(controller.bars_requests().await.len(), 1);
}

#[tokio::test]
async fn test_mock_search_fail() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let err = StockaiError::request(500, "boom");
    controller
        .set_search_behavior("AA", MockBehavior::Fail(err.clone()))
        .await;

    let sp = mock.as_symbol_search_provider().expect("search provider");
    let got = sp
        .search_symbols(SymbolSearchRequest::new("AA").unwrap())
        .await
        .expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn test_mock_unconfigured_is_unsupported() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let pp = mock.as_pattern_provider().expect("pattern provider");
    let err = pp
        .patterns(PatternRequest::new("MSFT.US").unwrap())
        .await
        .expect_err("err");
    assert!(matches!(err, StockaiError::Unsupported { .. }));
    assert_eq!(controller.pattern_requests().await[0].symbol(), "MSFT.US");
}

#[tokio::test(start_paused = true)]
async fn test_mock_delay_and_hang() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller
        .set_search_behavior(
            "MS",
            MockBehavior::Delay(Duration::from_secs(3), vec![SymbolInfo::new("MSFT.US")]),
        )
        .await;
    controller.set_bars_behavior("HANG.US", MockBehavior::Hang).await;

    let sp = mock.as_symbol_search_provider().expect("search provider");
    let started = tokio::time::Instant::now();
    let found = sp
        .search_symbols(SymbolSearchRequest::new("MS").unwrap())
        .await
        .unwrap();
    assert_eq!(found[0].symbol, "MSFT.US");
    assert!(started.elapsed() >= Duration::from_secs(3));

    let bp = mock.as_bars_provider().expect("bars provider");
    let hung = tokio::time::timeout(
        Duration::from_secs(60),
        bp.bars(BarsRequest::builder("HANG.US").build().unwrap()),
    )
    .await;
    assert!(hung.is_err());
}

#[tokio::test]
async fn test_mock_health_and_clear() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let hp = mock.as_health_provider().expect("health provider");
    hp.health().await.unwrap();

    controller
        .set_health_behavior(MockBehavior::Fail(StockaiError::Transport("down".into())))
        .await;
    assert!(hp.health().await.is_err());

    controller.clear_all_behaviors().await;
    hp.health().await.unwrap();
    assert!(controller.bars_requests().await.is_empty());
}
