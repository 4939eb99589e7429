//! Weekday × start-time bucketing and slot queries.

use std::collections::BTreeMap;

use meetings::Meeting;
use serde::Serialize;

use crate::{Cursor, IN_PROGRESS_DAY, LAST_WEEKDAY, MINUTES_PER_WEEK, SlotKey, TimeOfWeek, minute_of_week};

/// Assumed length of meetings whose feed entry carries no duration.
pub const DEFAULT_DURATION_MINUTES: u16 = 60;

/// All meetings sharing one weekday and one exact start time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub key: SlotKey,
    /// Input order is preserved; callers apply their own display sort.
    pub meetings: Vec<Meeting>,
}

/// Per-weekday ascending slot sequences for Sunday (1) through Saturday (7).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySlotTable {
    days: [Vec<Slot>; 7],
    default_duration: u16,
}

impl Default for DaySlotTable {
    fn default() -> Self {
        Self { days: Default::default(), default_duration: DEFAULT_DURATION_MINUTES }
    }
}

impl DaySlotTable {
    /// Override the duration assumed for meetings without one.
    #[must_use]
    pub fn with_default_duration(mut self, minutes: u16) -> Self {
        self.default_duration = minutes;
        self
    }

    #[must_use]
    pub fn default_duration(&self) -> u16 {
        self.default_duration
    }

    /// Slots of a weekday in ascending key order; `None` outside `1..=7`.
    #[must_use]
    pub fn day(&self, weekday: u8) -> Option<&[Slot]> {
        day_offset(weekday).map(|offset| self.days[offset].as_slice())
    }

    #[must_use]
    pub fn slot(&self, weekday: u8, index: usize) -> Option<&Slot> {
        self.day(weekday).and_then(|slots| slots.get(index))
    }

    /// Number of slots on a weekday; 0 for empty or invalid days.
    #[must_use]
    pub fn slot_count(&self, weekday: u8) -> usize {
        self.day(weekday).map_or(0, <[Slot]>::len)
    }

    /// Index of the last slot of a weekday, or 0 when the day is empty.
    #[must_use]
    pub fn last_slot_index(&self, weekday: u8) -> usize {
        self.slot_count(weekday).saturating_sub(1)
    }

    /// Total number of indexed meetings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meetings().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Every indexed meeting, Sunday first, slots ascending.
    pub fn meetings(&self) -> impl Iterator<Item = &Meeting> {
        self.days.iter().flatten().flat_map(|slot| slot.meetings.iter())
    }
}

/// Build the slot table for a meeting list.
///
/// Records with a weekday outside `1..=7` or a start minute past the end of
/// the day are dropped. Empty input yields seven empty days.
#[must_use]
pub fn build(meetings: &[Meeting]) -> DaySlotTable {
    let mut buckets: [BTreeMap<SlotKey, Vec<Meeting>>; 7] = Default::default();

    for meeting in meetings {
        let Some(offset) = day_offset(meeting.weekday) else {
            continue;
        };
        let Some(key) = SlotKey::from_minutes(meeting.start_minute) else {
            continue;
        };
        buckets[offset].entry(key).or_default().push(meeting.clone());
    }

    DaySlotTable {
        days: buckets.map(|bucket| bucket.into_iter().map(|(key, meetings)| Slot { key, meetings }).collect()),
        default_duration: DEFAULT_DURATION_MINUTES,
    }
}

/// Index of the slot on `weekday` whose key is closest to `time`.
///
/// Targets before the first slot clamp to 0, targets after the last clamp to
/// the last index, and a target exactly halfway between two slots picks the
/// earlier one. Distance is measured in minutes. An empty day returns
/// `Some(0)`; a weekday outside `1..=7` returns `None`.
#[must_use]
pub fn nearest_slot(table: &DaySlotTable, weekday: u8, time: SlotKey) -> Option<usize> {
    let slots = table.day(weekday)?;
    let (Some(first), Some(last)) = (slots.first(), slots.last()) else {
        return Some(0);
    };
    if time <= first.key {
        return Some(0);
    }
    if time >= last.key {
        return Some(slots.len() - 1);
    }

    let target = time.minutes();
    for (index, pair) in slots.windows(2).enumerate() {
        let (before, after) = (pair[0].key, pair[1].key);
        if before <= time && time <= after {
            let to_before = target - before.minutes();
            let to_after = after.minutes() - target;
            return Some(if to_before <= to_after { index } else { index + 1 });
        }
    }

    // Unreachable for a sorted table: the target lies strictly inside [first, last].
    Some(slots.len() - 1)
}

/// Meetings shown for a cursor.
///
/// Day 0 lists what is in progress at `now`; other days list the slot the
/// cursor points at, or nothing when the slot index is out of range.
#[must_use]
pub fn meetings_at(table: &DaySlotTable, cursor: Cursor, now: TimeOfWeek) -> Vec<&Meeting> {
    if cursor.day() == IN_PROGRESS_DAY {
        return in_progress(table, now);
    }
    table
        .slot(cursor.day(), cursor.slot())
        .map(|slot| slot.meetings.iter().collect())
        .unwrap_or_default()
}

/// Meetings underway at `now`, earliest start first, then by name.
///
/// A meeting runs for its own duration or the table's default. Start and end
/// are compared on a 7-day ring, so late Saturday meetings carry over into
/// Sunday morning.
#[must_use]
pub fn in_progress(table: &DaySlotTable, now: TimeOfWeek) -> Vec<&Meeting> {
    let now_minute = now.minute_of_week();
    let mut live = table
        .meetings()
        .filter_map(|meeting| {
            let duration = u32::from(meeting.duration_minutes.unwrap_or(table.default_duration));
            let start = minute_of_week(meeting.weekday, meeting.start_minute);
            let elapsed = (now_minute + MINUTES_PER_WEEK - start) % MINUTES_PER_WEEK;
            (elapsed < duration).then_some((elapsed, meeting))
        })
        .collect::<Vec<_>>();

    live.sort_by(|(a_elapsed, a), (b_elapsed, b)| b_elapsed.cmp(a_elapsed).then_with(|| a.name.cmp(&b.name)));
    live.into_iter().map(|(_, meeting)| meeting).collect()
}

fn day_offset(weekday: u8) -> Option<usize> {
    (1..=LAST_WEEKDAY).contains(&weekday).then(|| usize::from(weekday - 1))
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
