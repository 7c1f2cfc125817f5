use std::time::Duration;

use httpmock::prelude::*;
use stockai_core::{
    BarsRequest, ClientConfig, PatternRequest, StockaiError, SymbolSearchRequest, Timeframe,
    connector::{BarsProvider, HealthProvider, PatternProvider, SymbolSearchProvider},
};
use stockai_http::HttpConnector;

const BARS_BODY: &str = r#"{"results":[
  {"symbol":"AAPL.US","per":"D","date":20240103,"time":0,"open":184.2,"high":185.9,"low":183.4,"close":184.25,"volume":58414460,"openint":0,"timeframe":"daily"},
  {"symbol":"AAPL.US","per":"D","date":20240102,"time":0,"open":187.15,"high":188.44,"low":183.89,"close":185.64,"volume":null,"openint":null,"timeframe":"daily"}
]}"#;

fn connector(server: &MockServer) -> HttpConnector {
    let cfg = ClientConfig::new(server.base_url()).with_timeout(Duration::from_secs(5));
    HttpConnector::new(&cfg).unwrap()
}

#[tokio::test]
async fn bars_are_decoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/bars")
                .query_param("symbol", "AAPL.US")
                .query_param("timeframe", "daily")
                .query_param("limit", "200");
            then.status(200)
                .header("content-type", "application/json")
                .body(BARS_BODY);
        })
        .await;

    let req = BarsRequest::builder("AAPL.US").limit(200).build().unwrap();
    let bars = connector(&server).bars(req).await.unwrap();
    mock.assert_async().await;

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].date, 20_240_103);
    assert_eq!(bars[0].timeframe, Timeframe::Daily);
    assert_eq!(bars[1].volume, None);
}

#[tokio::test]
async fn error_body_becomes_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/bars");
            then.status(400).body("order must be 'asc' or 'desc'");
        })
        .await;

    let err = connector(&server)
        .bars(BarsRequest::builder("AAPL.US").build().unwrap())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StockaiError::Request {
            status: 400,
            message: "order must be 'asc' or 'desc'".into()
        }
    );
}

#[tokio::test]
async fn empty_error_body_gets_generic_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/symbols");
            then.status(503);
        })
        .await;

    let err = connector(&server)
        .search_symbols(SymbolSearchRequest::new("AA").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed with 503");
}

#[tokio::test]
async fn search_sends_query_and_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/symbols")
                .query_param("q", "AA")
                .query_param("limit", "30");
            then.status(200).body(
                r#"{"results":[{"symbol":"AAPL.US","exchange":"nasdaq","asset_type":"stocks","country":"us"},{"symbol":"AA.US","exchange":null,"asset_type":null,"country":null}]}"#,
            );
        })
        .await;

    let req = SymbolSearchRequest::new("AA").unwrap().with_limit(30).unwrap();
    let found = connector(&server).search_symbols(req).await.unwrap();
    mock.assert_async().await;
    assert_eq!(found[0].caption(), "NASDAQ | stocks");
    assert_eq!(found[1].exchange, None);
}

#[tokio::test]
async fn patterns_and_health() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/getPatterns")
                .query_param("symbol", "AAPL.US")
                .query_param("trend_length", "7")
                .query_param("similarity_score", "80");
            then.status(200)
                .body(r#"{"results":[{"starting_date":20230815,"similarity_score":91.5}]}"#);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/health");
            then.status(200).body(r#"{"status":"ok"}"#);
        })
        .await;

    let http = connector(&server);
    let found = http
        .patterns(PatternRequest::new("AAPL.US").unwrap())
        .await
        .unwrap();
    assert_eq!(found[0].starting_date, 20_230_815);
    http.health().await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    // Port 9 (discard) is not expected to be listening.
    let cfg = ClientConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2));
    let http = HttpConnector::new(&cfg).unwrap();
    let err = http.health().await.unwrap_err();
    assert!(matches!(err, StockaiError::Transport(_)));
}

#[test]
fn relative_base_is_rejected() {
    let err = HttpConnector::new(&ClientConfig::new("")).err().unwrap();
    assert!(matches!(err, StockaiError::InvalidArg(_)));
}
