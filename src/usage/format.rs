//! Display helpers for table cells

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

/// Format an instant as `D-M-YYYY H:M` in local time.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Format an instant as `D-M-YYYY H:M` in `tz`. No field is zero-padded.
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String {
    let local = timestamp.with_timezone(tz);
    format!(
        "{}-{}-{} {}:{}",
        local.day(),
        local.month(),
        local.year(),
        local.hour(),
        local.minute()
    )
}

pub fn format_credits(credits: f64) -> String {
    format!("{:.2}", credits)
}
