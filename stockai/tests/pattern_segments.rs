use chrono::NaiveDate;
use stockai::{Bar, Dashboard, Fetch, Lookback, StockPattern, Timeframe, Tone};
use stockai_mock::{DynamicMockConnector, MockBehavior};

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// Daily bars for March 1..=20 with `open == day`, except a missing open on the 5th.
fn march_bars() -> Vec<Bar> {
    (1..=20)
        .map(|day| Bar {
            symbol: "SEG.US".into(),
            per: "D".into(),
            date: 20_240_300 + i64::from(day),
            time: 0,
            open: (day != 5).then_some(f64::from(day)),
            high: None,
            low: None,
            close: Some(f64::from(day)),
            volume: None,
            openint: None,
            timeframe: Timeframe::Daily,
        })
        .collect()
}

async fn loaded() -> Dashboard {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("segments");
    ctl.set_bars_behavior("SEG.US", MockBehavior::Return(march_bars()))
        .await;
    ctl.set_pattern_behavior(
        "SEG.US",
        MockBehavior::Return(vec![
            StockPattern {
                starting_date: 20_240_303,
                similarity_score: 92.5,
            },
            StockPattern {
                starting_date: 20_240_305,
                similarity_score: 88.0,
            },
        ]),
    )
    .await;
    let dash = Dashboard::builder().with_connector(conn).build().unwrap();
    assert_eq!(dash.load_bars("SEG.US").await.unwrap(), Fetch::Applied(20));
    assert_eq!(
        dash.load_patterns(march(20)).await.unwrap(),
        Fetch::Applied(2)
    );
    dash
}

#[tokio::test]
async fn segments_slice_opens_around_each_match() {
    let dash = loaded().await;
    let page = dash.pattern_segments_page(0).await.unwrap();
    assert_eq!(page.total, 2);

    let first = &page.rows[0];
    assert_eq!((first.start, first.end, first.follow_end), (march(3), march(10), march(17)));
    assert_eq!(first.range_label(), "2024-03-03 to 2024-03-10");
    assert_eq!(first.trend, [3.0, 4.0, 0.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    assert_eq!(first.follow_on, [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
    assert_eq!(first.trend_change().label, "+233.3%");
    assert_eq!(first.follow_on_change().label, "+70.0%");
    assert!((first.similarity_score - 92.5).abs() < f64::EPSILON);

    // A missing first open plots as zero, which leaves no base for a change.
    let second = &page.rows[1];
    assert_eq!(second.trend[0], 0.0);
    assert_eq!(second.trend_change().tone, Tone::Neutral);
}

#[tokio::test]
async fn current_trend_starts_a_trend_length_before_the_newest_bar() {
    let dash = loaded().await;
    assert_eq!(dash.current_trend_start().await.unwrap(), Some(march(13)));
}

#[tokio::test]
async fn open_series_follows_the_lookback() {
    let dash = loaded().await;
    let series = dash
        .open_series(Lookback::Week1, march(20))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(series.dates.first(), Some(&march(13)));
    assert_eq!(series.opens.len(), 8);
    assert_eq!(series.change.label, "+5.3%");

    // The missing open on the 5th is skipped, not plotted as zero.
    let all = dash
        .open_series(Lookback::AllTime, march(20))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(all.opens.len(), 19);
    assert!(!all.dates.contains(&march(5)));
}

#[tokio::test]
async fn nothing_loaded_yields_nothing() {
    let (conn, _ctl) = DynamicMockConnector::new_with_controller("empty");
    let dash = Dashboard::builder().with_connector(conn).build().unwrap();
    assert_eq!(dash.current_trend_start().await.unwrap(), None);
    assert!(dash.open_series(Lookback::Month1, march(20)).await.unwrap().is_none());
    assert_eq!(dash.pattern_segments_page(0).await.unwrap().total, 0);
}
