/// Utilities for date and time display
///
/// Catalog timestamps are kept in UTC and shown in the visitor's zone.
use chrono::{DateTime, Local, Utc};
use contracts::shared::format::format_timestamp;

/// Format a UTC timestamp in the browser's local zone.
/// Example: 2024-03-15T17:02:26Z in UTC-3 -> "15/3/2024, 14:02:26"
pub fn format_local(ts: DateTime<Utc>) -> String {
    format_timestamp(&ts.with_timezone(&Local))
}
