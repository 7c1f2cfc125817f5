use chrono::{NaiveDate, Timelike};
use proptest::prelude::*;
use stockai_core::{StockaiError, decode_date, decode_time, encode_date, format_date};

#[test]
fn leap_day_decodes() {
    assert_eq!(
        decode_date(20_240_229).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert!(matches!(decode_date(20_230_229), Err(StockaiError::Data(_))));
}

#[test]
fn short_time_keys_are_early_morning() {
    let t = decode_time(93_000).unwrap();
    assert_eq!((t.hour(), t.minute()), (9, 30));
    let t = decode_time(500).unwrap();
    assert_eq!((t.hour(), t.minute()), (0, 5));
    let t = decode_time(3000).unwrap();
    assert_eq!((t.hour(), t.minute()), (0, 30));
}

proptest! {
    #[test]
    fn encode_then_format_matches_chrono(days in 0i64..60_000) {
        let d = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
        let key = encode_date(d);
        prop_assert_eq!(decode_date(key).unwrap(), d);
        prop_assert_eq!(format_date(key).unwrap(), d.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn in_range_six_digit_times_decode(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let key = i64::from(h * 10_000 + m * 100 + s);
        let t = decode_time(key).unwrap();
        prop_assert_eq!((t.hour(), t.minute()), (h, m));
    }
}
