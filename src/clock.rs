//! Wall-clock resolution into a point in the week.

use slots::TimeOfWeek;
use time::OffsetDateTime;

/// The configured override, or the local time of day.
///
/// Falls back to UTC when the local offset cannot be determined (common in
/// multi-threaded processes on some platforms).
#[must_use]
pub fn resolve_now(now_override: Option<TimeOfWeek>) -> TimeOfWeek {
    if let Some(now) = now_override {
        return now;
    }
    let now = OffsetDateTime::now_local().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "local offset unavailable, using UTC");
        OffsetDateTime::now_utc()
    });
    time_of_week(now)
}

#[must_use]
pub fn time_of_week(at: OffsetDateTime) -> TimeOfWeek {
    let minute = u16::from(at.hour()) * 60 + u16::from(at.minute());
    TimeOfWeek::new(at.weekday().number_from_sunday(), minute).unwrap_or(TimeOfWeek::WEEK_START)
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;
