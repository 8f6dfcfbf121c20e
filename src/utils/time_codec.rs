// @file: capital_history/src/utils/time_codec.rs
// @description: Conversions between Binance epoch-millisecond timestamps and 'YYYY-MM-DD HH:MM:SS' UTC strings.
// @author: LAS.

use chrono::{DateTime, NaiveDateTime, Utc};
use crate::core::errors::{HistoryError, Result};


//
// CONSTANTS
//

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const MS_IN_S: i64 = 1000;


//
// PUBLIC INTERFACE
//

pub fn millis_to_datetime(ms: i64) -> Result<String> {
    // #1. Reject pre-epoch input
    if ms < 0 {
        return Err(HistoryError::InvalidTimestamp(ms));
    }

    // #2. Convert (sub-second part is truncated by the format)
    let dt: DateTime<Utc> = DateTime::from_timestamp_millis(ms)
        .ok_or(HistoryError::InvalidTimestamp(ms))?;

    Ok(dt.format(DATETIME_FORMAT).to_string())
}

pub fn datetime_to_millis(s: &str) -> Result<i64> {
    // #1. Exact shape first: chrono lets the format's space match any run of whitespace
    if !has_datetime_shape(s) {
        return Err(HistoryError::InvalidDatetimeFormat(s.to_string()));
    }

    // #2. Calendar validation
    let naive: NaiveDateTime = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map_err(|_| HistoryError::InvalidDatetimeFormat(s.to_string()))?;

    Ok(naive.and_utc().timestamp_millis())
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn now_datetime() -> String {
    Utc::now().format(DATETIME_FORMAT).to_string()
}


//
// INTERNAL HELPERS
//

// 'YYYY-MM-DD HH:MM:SS': digits everywhere except the fixed separators.
fn has_datetime_shape(s: &str) -> bool {
    let bytes: &[u8] = s.as_bytes();
    if bytes.len() != 19 {
        return false;
    }

    bytes.iter().enumerate().all(|(idx, b)| match idx {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}
