//! Cursor navigation across the 8-day ring (in-progress, Sunday..Saturday).

use serde::Serialize;

use crate::{DaySlotTable, IN_PROGRESS_DAY, LAST_WEEKDAY, SlotKey, TimeOfWeek, nearest_slot};

/// Position of the displayed slot: a day index `0..=7` and a slot index.
///
/// The slot index is carried but ignored while on the in-progress day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Cursor {
    day: u8,
    slot: usize,
}

impl Cursor {
    /// `None` when `day > 7`.
    #[must_use]
    pub fn new(day: u8, slot: usize) -> Option<Self> {
        (day <= LAST_WEEKDAY).then_some(Self { day, slot })
    }

    #[must_use]
    pub const fn in_progress() -> Self {
        Self { day: IN_PROGRESS_DAY, slot: 0 }
    }

    #[must_use]
    pub fn day(self) -> u8 {
        self.day
    }

    #[must_use]
    pub fn slot(self) -> usize {
        self.slot
    }

    #[must_use]
    pub fn is_in_progress(self) -> bool {
        self.day == IN_PROGRESS_DAY
    }

    /// Pull a weekday cursor's slot back inside `table`, e.g. after a rebuild.
    #[must_use]
    pub fn clamped(self, table: &DaySlotTable) -> Self {
        if self.is_in_progress() {
            return self;
        }
        Self { day: self.day, slot: self.slot.min(table.last_slot_index(self.day)) }
    }
}

/// Step forward one slot.
///
/// Leaving the in-progress day lands on Sunday's first slot. Running off the
/// end of a weekday moves to the next day's first slot, except Saturday,
/// which wraps into the in-progress day keeping its last slot index.
/// A stale slot index is clamped to the day's last slot first.
#[must_use]
pub fn next(table: &DaySlotTable, cursor: Cursor) -> Cursor {
    if cursor.is_in_progress() {
        return Cursor { day: 1, slot: 0 };
    }

    let slot = cursor.slot.min(table.last_slot_index(cursor.day)) + 1;
    if slot < table.slot_count(cursor.day) {
        return Cursor { day: cursor.day, slot };
    }
    if cursor.day == LAST_WEEKDAY {
        Cursor { day: IN_PROGRESS_DAY, slot: slot - 1 }
    } else {
        Cursor { day: cursor.day + 1, slot: 0 }
    }
}

/// Step backward one slot.
///
/// Underflow moves to the previous day's last slot. Sunday backs into the
/// in-progress day, and the in-progress day backs into Saturday's last slot.
#[must_use]
pub fn previous(table: &DaySlotTable, cursor: Cursor) -> Cursor {
    if cursor.is_in_progress() {
        return Cursor { day: LAST_WEEKDAY, slot: table.last_slot_index(LAST_WEEKDAY) };
    }

    let slot = cursor.slot.min(table.slot_count(cursor.day));
    if slot > 0 {
        return Cursor { day: cursor.day, slot: slot - 1 };
    }
    if cursor.day == 1 {
        Cursor::in_progress()
    } else {
        let day = cursor.day - 1;
        Cursor { day, slot: table.last_slot_index(day) }
    }
}

/// Cursor at `now`'s weekday, on the slot nearest `now`'s time of day.
#[must_use]
pub fn jump_to_now(table: &DaySlotTable, now: TimeOfWeek) -> Cursor {
    let slot = nearest_slot(table, now.weekday(), now.slot_key()).unwrap_or(0);
    Cursor { day: now.weekday(), slot }
}

/// Cursor for an explicit day and time, as used by deep links and day pickers.
///
/// Day 0 always yields slot 0. Returns `None` when `day > 7`.
#[must_use]
pub fn jump_to(table: &DaySlotTable, day: u8, time: SlotKey) -> Option<Cursor> {
    if day == IN_PROGRESS_DAY {
        return Some(Cursor::in_progress());
    }
    let slot = nearest_slot(table, day, time)?;
    Some(Cursor { day, slot })
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod tests;
