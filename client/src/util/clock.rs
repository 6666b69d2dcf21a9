//! Wall clock in the visitor's local offset.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{OffsetDateTime, UtcOffset};

/// Offset for a JS `getTimezoneOffset()` value (minutes *behind* UTC).
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// Current time in the browser's local offset (UTC on native builds).
pub fn now() -> OffsetDateTime {
    let utc = OffsetDateTime::now_utc();
    #[cfg(feature = "csr")]
    {
        utc.to_offset(offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset()))
    }
    #[cfg(not(feature = "csr"))]
    {
        utc
    }
}
