//! Day/time slot index over a weekly meeting list.
//!
//! This crate is UI-framework agnostic so any presentation layer can consume
//! it directly for rendering "what meets when" views.
//!
//! DESIGN
//! ======
//! Meetings are bucketed into 7 weekdays, then grouped by exact start time
//! into ascending slots. A virtual day 0 ("in progress") sits in front of
//! Sunday, so cursor navigation walks a ring of 8 days. The index is rebuilt
//! from scratch whenever the input list changes; nothing here is patched
//! incrementally and nothing performs I/O.

use std::fmt;

use meetings::{MINUTES_PER_DAY, format_clock, parse_clock};
use serde::{Deserialize, Serialize};

pub mod cursor;
pub mod filter;
pub mod navigator;
pub mod table;

pub use cursor::{Cursor, jump_to, jump_to_now, next, previous};
pub use filter::MeetingFilter;
pub use navigator::{Navigator, SlotObserver};
pub use table::{DEFAULT_DURATION_MINUTES, DaySlotTable, Slot, build, in_progress, meetings_at, nearest_slot};

/// Day index of the synthetic "in progress now" pseudo-day.
pub const IN_PROGRESS_DAY: u8 = 0;

/// Highest real weekday index (Saturday).
pub const LAST_WEEKDAY: u8 = 7;

/// Length of the 7-day ring that in-progress times are compared on.
pub const MINUTES_PER_WEEK: u32 = 7 * MINUTES_PER_DAY as u32;

const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Display name for a day index; day 0 is the in-progress pseudo-day.
#[must_use]
pub fn weekday_name(day: u8) -> &'static str {
    match day {
        IN_PROGRESS_DAY => "In progress",
        1..=LAST_WEEKDAY => WEEKDAY_NAMES[usize::from(day - 1)],
        _ => "Unknown",
    }
}

/// Parse a day index from `0`..`7`, a weekday name or its three-letter
/// prefix (`sun`, `Monday`), or `live` for the in-progress pseudo-day.
#[must_use]
pub fn parse_day(raw: &str) -> Option<u8> {
    let raw = raw.trim().to_ascii_lowercase();
    if let Ok(day) = raw.parse::<u8>() {
        return (day <= LAST_WEEKDAY).then_some(day);
    }
    if raw == "live" {
        return Some(IN_PROGRESS_DAY);
    }
    if raw.len() < 3 {
        return None;
    }
    WEEKDAY_NAMES
        .iter()
        .position(|name| name.to_ascii_lowercase().starts_with(&raw))
        .and_then(|index| u8::try_from(index + 1).ok())
}

// =============================================================================
// SLOT KEY
// =============================================================================

/// Time-of-day grouping key encoded as `hour * 100 + minute` (1345 = 1:45pm).
///
/// Ordering matches chronological ordering within a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotKey(u16);

impl SlotKey {
    /// Key for a minute-of-day; `None` when `minute >= 1440`.
    #[must_use]
    pub fn from_minutes(minute: u16) -> Option<Self> {
        (minute < MINUTES_PER_DAY).then_some(Self::encode(minute))
    }

    /// Key from an `HHMM` integer; `None` for impossible clock values like 1375.
    #[must_use]
    pub fn from_hhmm(value: u16) -> Option<Self> {
        (value / 100 < 24 && value % 100 < 60).then_some(Self(value))
    }

    /// Key from an `HH:MM` clock string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_clock(raw).and_then(Self::from_minutes)
    }

    const fn encode(minute: u16) -> Self {
        Self((minute / 60) * 100 + minute % 60)
    }

    #[must_use]
    pub fn hhmm(self) -> u16 {
        self.0
    }

    /// Minutes since midnight.
    #[must_use]
    pub fn minutes(self) -> u16 {
        (self.0 / 100) * 60 + self.0 % 100
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(self.minutes()))
    }
}

// =============================================================================
// TIME OF WEEK
// =============================================================================

/// A validated point in the week: weekday `1..=7` plus minute of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfWeek {
    weekday: u8,
    minute: u16,
}

impl TimeOfWeek {
    /// Sunday 00:00.
    pub const WEEK_START: Self = Self { weekday: 1, minute: 0 };

    #[must_use]
    pub fn new(weekday: u8, minute: u16) -> Option<Self> {
        ((1..=LAST_WEEKDAY).contains(&weekday) && minute < MINUTES_PER_DAY).then_some(Self { weekday, minute })
    }

    /// Parse `"<day> HH:MM"`, e.g. `"sun 14:00"` or `"3 08:30"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (day, clock) = raw.trim().split_once(char::is_whitespace)?;
        Self::new(parse_day(day)?, parse_clock(clock)?)
    }

    #[must_use]
    pub fn weekday(self) -> u8 {
        self.weekday
    }

    #[must_use]
    pub fn minute(self) -> u16 {
        self.minute
    }

    #[must_use]
    pub fn slot_key(self) -> SlotKey {
        SlotKey::encode(self.minute)
    }

    /// Minutes since Sunday midnight.
    #[must_use]
    pub fn minute_of_week(self) -> u32 {
        minute_of_week(self.weekday, self.minute)
    }
}

impl fmt::Display for TimeOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", weekday_name(self.weekday), format_clock(self.minute))
    }
}

pub(crate) fn minute_of_week(weekday: u8, minute: u16) -> u32 {
    u32::from(weekday.saturating_sub(1)) * u32::from(MINUTES_PER_DAY) + u32::from(minute)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
