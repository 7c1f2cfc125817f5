use chrono::{Datelike, Duration, NaiveDate, Weekday};
use stockai_core::{Bar, Timeframe, encode_date};

/// Last trading day covered by the fixtures.
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap_or_default()
}

const DAILY_BARS: usize = 520;
const INTRADAY_DAYS: usize = 5;
const SESSION_BARS: usize = 78;

fn trading_days(count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut d = anchor();
    while days.len() < count {
        if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(d);
        }
        d -= Duration::days(1);
    }
    days.reverse();
    days
}

#[allow(clippy::cast_precision_loss)]
fn price(base: f64, seed: f64, i: usize) -> f64 {
    let x = i as f64;
    let wave = (x / 17.0 * seed).sin() * 0.06 + (x / 90.0).sin() * 0.1;
    ((base * (1.0 + wave + x * 0.0004)) * 100.0).round() / 100.0
}

fn bar(
    symbol: &str,
    per: &str,
    timeframe: Timeframe,
    date: i64,
    time: i64,
    i: usize,
    close: f64,
) -> Bar {
    // Cycle up, down and flat bars; sprinkle missing fields.
    let open = match i % 3 {
        0 => close - 0.5,
        1 => close + 0.5,
        _ => close,
    };
    #[allow(clippy::cast_precision_loss)]
    let volume = (i % 40 != 39).then(|| 1_000_000.0 + (i % 11) as f64 * 50_000.0);
    Bar {
        symbol: symbol.to_string(),
        per: per.to_string(),
        date,
        time,
        open: (i % 97 != 96).then_some(open),
        high: Some(open.max(close) + 1.0),
        low: Some(open.min(close) - 1.0),
        close: Some(close),
        volume,
        openint: Some(0.0),
        timeframe,
    }
}

fn params(symbol: &str) -> Option<(f64, f64)> {
    match symbol {
        "AAPL.US" => Some((185.0, 1.0)),
        "MSFT.US" => Some((420.0, 1.7)),
        "SPY.US" => Some((540.0, 0.6)),
        "TSLA.US" => Some((180.0, 2.3)),
        _ => None,
    }
}

/// Oldest-first series for `symbol` at `timeframe`.
pub fn series(symbol: &str, timeframe: &Timeframe) -> Option<Vec<Bar>> {
    let (base, seed) = params(symbol)?;
    match timeframe {
        Timeframe::Daily => Some(
            trading_days(DAILY_BARS)
                .into_iter()
                .enumerate()
                .map(|(i, d)| {
                    bar(symbol, "D", Timeframe::Daily, encode_date(d), 0, i, price(base, seed, i))
                })
                .collect(),
        ),
        Timeframe::FiveMinute => {
            let mut out = Vec::with_capacity(INTRADAY_DAYS * SESSION_BARS);
            for (day_idx, d) in trading_days(INTRADAY_DAYS).into_iter().enumerate() {
                for slot in 0..SESSION_BARS {
                    let minutes = 9 * 60 + 30 + slot * 5;
                    let time = i64::try_from((minutes / 60) * 10_000 + (minutes % 60) * 100)
                        .unwrap_or_default();
                    let i = day_idx * SESSION_BARS + slot;
                    out.push(bar(
                        symbol,
                        "5",
                        Timeframe::FiveMinute,
                        encode_date(d),
                        time,
                        i,
                        price(base, seed * 4.0, i),
                    ));
                }
            }
            Some(out)
        }
        Timeframe::Other(_) => None,
    }
}
