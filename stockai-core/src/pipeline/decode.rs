use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::types::StockaiError;

const MIN_DATE_KEY: i64 = 10_000_000;
const MAX_DATE_KEY: i64 = 99_999_999;
const MAX_TIME_KEY: i64 = 235_959;

/// Decode an 8-digit `YYYYMMDD` key into a calendar date.
///
/// Digits `[0,4)` are the year, `[4,6)` the 1-based month and `[6,8)` the day.
///
/// ```
/// use chrono::NaiveDate;
/// use stockai_core::decode_date;
///
/// assert_eq!(decode_date(20240229).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(decode_date(20230229).is_err()); // not a leap year
/// assert!(decode_date(2024011).is_err()); // seven digits
/// ```
///
/// # Errors
/// Returns `StockaiError::Data` when the key does not have exactly eight
/// digits or does not name a real calendar day.
pub fn decode_date(value: i64) -> Result<NaiveDate, StockaiError> {
    if !(MIN_DATE_KEY..=MAX_DATE_KEY).contains(&value) {
        return Err(StockaiError::Data(format!(
            "date key {value} is not an 8-digit YYYYMMDD value"
        )));
    }
    let year = i32::try_from(value / 10_000)
        .map_err(|_| StockaiError::Data(format!("date key {value} has an invalid year")))?;
    let month = u32::try_from(value / 100 % 100)
        .map_err(|_| StockaiError::Data(format!("date key {value} has an invalid month")))?;
    let day = u32::try_from(value % 100)
        .map_err(|_| StockaiError::Data(format!("date key {value} has an invalid day")))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| StockaiError::Data(format!("date key {value} is not a calendar date")))
}

/// Decode a `YYYYMMDD` key as the UTC midnight instant of that day.
///
/// # Errors
/// Same as [`decode_date`].
pub fn decode_date_utc(value: i64) -> Result<DateTime<Utc>, StockaiError> {
    Ok(decode_date(value)?.and_time(NaiveTime::MIN).and_utc())
}

/// Encode a calendar date as its `YYYYMMDD` key.
#[must_use]
pub fn encode_date(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Decode an `HHMMSS` bar time key into hour and minute.
///
/// The key is zero-padded to six digits before slicing, so `3000` is
/// `00:30:00` and `500` is `00:05:00`. Seconds are validated, then dropped.
///
/// ```
/// use chrono::Timelike;
/// use stockai_core::decode_time;
///
/// let t = decode_time(93_000).unwrap();
/// assert_eq!((t.hour(), t.minute()), (9, 30));
/// let t = decode_time(3_000).unwrap();
/// assert_eq!((t.hour(), t.minute()), (0, 30));
/// ```
///
/// # Errors
/// Returns `StockaiError::Data` for negative keys, keys above `235959`, or
/// out-of-range minute/second fields.
pub fn decode_time(value: i64) -> Result<NaiveTime, StockaiError> {
    if !(0..=MAX_TIME_KEY).contains(&value) {
        return Err(StockaiError::Data(format!(
            "time key {value} is not an HHMMSS value"
        )));
    }
    let (hour, minute, second) = (value / 10_000, value / 100 % 100, value % 100);
    let field = |v: i64| u32::try_from(v).unwrap_or(u32::MAX);
    if second >= 60 {
        return Err(StockaiError::Data(format!(
            "time key {value} has an invalid seconds field"
        )));
    }
    NaiveTime::from_hms_opt(field(hour), field(minute), 0)
        .ok_or_else(|| StockaiError::Data(format!("time key {value} is not a time of day")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn decodes_leap_day_as_utc_midnight() {
        let ts = decode_date_utc(20_240_229).unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert!(decode_date(0).is_err());
        assert!(decode_date(-20_240_101).is_err());
        assert!(decode_date(202_401_011).is_err());
        assert!(decode_date(20_241_301).is_err());
        assert!(decode_date(20_240_100).is_err());
    }

    #[test]
    fn encode_inverts_decode() {
        let d = decode_date(19_991_231).unwrap();
        assert_eq!(encode_date(d), 19_991_231);
    }

    #[test]
    fn short_times_are_padded_to_six_digits() {
        let t = decode_time(930).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 9));
        let t = decode_time(500).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 5));
        let t = decode_time(3000).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 30));
        let t = decode_time(0).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));
    }

    #[test]
    fn six_digit_times_drop_seconds() {
        let t = decode_time(153_045).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (15, 30, 0));
        let t = decode_time(93_000).unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 30));
    }

    #[test]
    fn rejects_out_of_range_times() {
        assert!(decode_time(-1).is_err());
        assert!(decode_time(240_000).is_err());
        assert!(decode_time(6000).is_err());
        assert!(decode_time(61).is_err());
        assert!(decode_time(126_000).is_err());
        assert!(decode_time(120_060).is_err());
    }
}
