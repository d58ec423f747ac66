//! Recency normalization and "most recent N" selection.
//!
//! Upstream documents carry their creation time in whatever shape the admin
//! panel wrote at the time: epoch milliseconds, epoch seconds, Firestore
//! timestamp objects, RFC 3339 strings, bare ISO dates or `DD/MM/YYYY` locale
//! strings. Everything is folded into epoch milliseconds; anything that cannot
//! be read sorts as the oldest entry.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::cmp::Reverse;

use crate::constants::EPOCH_SECONDS_CUTOFF;
use crate::record::ContentRecord;

const NAIVE_DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y, %H:%M",
];

const NAIVE_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Normalize any supported recency representation to epoch milliseconds.
#[must_use]
pub fn normalize(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(round_to_i64))
            .map(epoch_to_millis),
        Value::String(s) => parse_str(s),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(integer_like)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(integer_like)
                .unwrap_or(0);
            seconds
                .checked_mul(1000)
                .and_then(|ms| ms.checked_add(nanos / 1_000_000))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(f: f64) -> i64 {
    f.round() as i64
}

fn integer_like(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

const fn epoch_to_millis(raw: i64) -> i64 {
    if raw.unsigned_abs() < EPOCH_SECONDS_CUTOFF.unsigned_abs() {
        raw.saturating_mul(1000)
    } else {
        raw
    }
}

fn parse_str(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(epoch_to_millis(n));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Stable sort, newest first. Records without a readable recency go last,
/// keeping their relative order.
pub fn sort_most_recent(records: &mut [ContentRecord]) {
    records.sort_by_cached_key(|record| Reverse(record.recency()));
}

/// Sort by recency, then keep at most `limit` records.
///
/// The cap is applied after sorting so the result is the newest `limit`
/// regardless of upstream ordering.
#[must_use]
pub fn most_recent(mut records: Vec<ContentRecord>, limit: Option<usize>) -> Vec<ContentRecord> {
    sort_most_recent(&mut records);
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    records
}
