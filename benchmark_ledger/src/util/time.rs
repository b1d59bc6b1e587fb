//!
//! Epoch millisecond timestamps.
//!

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

///
/// Returns the current time in milliseconds since the Unix epoch.
///
pub fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

///
/// Formats epoch milliseconds as an RFC 3339 UTC timestamp.
///
/// Values outside the representable range are printed as raw numbers.
///
pub fn format_millis(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| millis.to_string())
}
