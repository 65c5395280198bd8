//! String formatting utilities for UI rendering.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// Weekday, month name, day, year and 12-hour clock, e.g.
/// "Tuesday January 22, 2019 09:05AM".
pub const HEADER_FORMAT: &str = "%A %B %d, %Y %I:%M%p";

/// Format an entry timestamp for the entry header.
///
/// `None` renders in the system's local time.
pub fn format_timestamp(timestamp: &DateTime<Utc>, timezone: Option<Tz>) -> String {
    match timezone {
        Some(tz) => timestamp.with_timezone(&tz).format(HEADER_FORMAT).to_string(),
        None => timestamp
            .with_timezone(&Local)
            .format(HEADER_FORMAT)
            .to_string(),
    }
}

/// A rule of `ch` as wide as `text` (in characters).
pub fn rule_for(text: &str, ch: char) -> String {
    ch.to_string().repeat(text.chars().count())
}
