//! Archive timestamp codec
//!
//! The Wayback Machine identifies snapshots by a compact 14-digit UTC timestamp
//! (`YYYYMMDDhhmmss`). This module turns one into the display form
//! `YYYY-MM-DD hh:mm:ss`. No timezone conversion is applied; the digits are
//! already UTC wall-clock components.

use crate::TimestampError;
use chrono::{NaiveDate, NaiveDateTime};

/// Number of digits in a compact archive timestamp
pub const TIMESTAMP_LEN: usize = 14;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a compact timestamp into a calendar value
///
/// Fields are sliced from fixed offsets 0, 4, 6, 8, 10 and 12.
pub fn parse(timestamp: &str) -> Result<NaiveDateTime, TimestampError> {
    if timestamp.len() != TIMESTAMP_LEN {
        return Err(TimestampError::Length(timestamp.chars().count()));
    }

    if !timestamp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::NonDigit(timestamp.to_string()));
    }

    // All bytes are ASCII digits, so byte slicing is safe and parsing cannot fail
    let field = |from: usize, to: usize| -> u32 {
        timestamp[from..to]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };

    NaiveDate::from_ymd_opt(field(0, 4) as i32, field(4, 6), field(6, 8))
        .and_then(|date| date.and_hms_opt(field(8, 10), field(10, 12), field(12, 14)))
        .ok_or_else(|| TimestampError::OutOfRange(timestamp.to_string()))
}

/// Decodes a compact timestamp into `YYYY-MM-DD hh:mm:ss`
///
/// # Examples
///
/// ```
/// use wayback_save::timestamp::decode;
///
/// assert_eq!(decode("20240101123045").unwrap(), "2024-01-01 12:30:45");
/// assert!(decode("2024").is_err());
/// ```
pub fn decode(timestamp: &str) -> Result<String, TimestampError> {
    parse(timestamp).map(|dt| dt.format(DISPLAY_FORMAT).to_string())
}
