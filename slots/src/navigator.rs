//! Navigator: the owning context for one browsing session.
//!
//! DESIGN
//! ======
//! The navigator owns the current table, the cursor, and the reference
//! "now". Presentation code talks to it through method calls and hears back
//! only through [`SlotObserver`]: every cursor change is reported with the
//! meetings to show, and refresh requests are forwarded to whoever can
//! reload data. There is no back-reference from the navigator to its owner.

use meetings::Meeting;

use crate::{Cursor, DaySlotTable, SlotKey, TimeOfWeek, cursor, meetings_at};

/// Narrow callback surface the navigator reports through.
pub trait SlotObserver {
    /// The cursor moved, or the table under it was replaced.
    fn on_slot_changed(&mut self, cursor: Cursor, meetings: &[&Meeting]);

    /// The user asked for fresh data. The owner should reload, rebuild, and
    /// hand the new table to [`Navigator::replace_table`].
    fn on_refresh_requested(&mut self);
}

pub struct Navigator<O> {
    table: DaySlotTable,
    cursor: Cursor,
    now: TimeOfWeek,
    observer: O,
}

impl<O: SlotObserver> Navigator<O> {
    /// Start a session positioned at `now` and report the initial slot.
    pub fn new(table: DaySlotTable, now: TimeOfWeek, observer: O) -> Self {
        let cursor = cursor::jump_to_now(&table, now);
        let mut navigator = Self { table, cursor, now, observer };
        navigator.notify();
        navigator
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn table(&self) -> &DaySlotTable {
        &self.table
    }

    #[must_use]
    pub fn now(&self) -> TimeOfWeek {
        self.now
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Meetings for the current cursor.
    #[must_use]
    pub fn current(&self) -> Vec<&Meeting> {
        meetings_at(&self.table, self.cursor, self.now)
    }

    pub fn next(&mut self) -> Cursor {
        self.move_to(cursor::next(&self.table, self.cursor))
    }

    pub fn previous(&mut self) -> Cursor {
        self.move_to(cursor::previous(&self.table, self.cursor))
    }

    /// Update the reference time and jump to its nearest slot.
    pub fn jump_to_now(&mut self, now: TimeOfWeek) -> Cursor {
        self.now = now;
        self.move_to(cursor::jump_to_now(&self.table, now))
    }

    /// Jump to an explicit day and time; `None` (and no move) when `day > 7`.
    pub fn jump_to(&mut self, day: u8, time: SlotKey) -> Option<Cursor> {
        let target = cursor::jump_to(&self.table, day, time)?;
        Some(self.move_to(target))
    }

    /// Update the reference time without moving the cursor.
    pub fn set_now(&mut self, now: TimeOfWeek) {
        self.now = now;
    }

    /// Install a rebuilt table, keeping the cursor's day and clamping its slot.
    pub fn replace_table(&mut self, table: DaySlotTable) {
        self.table = table;
        self.cursor = self.cursor.clamped(&self.table);
        self.notify();
    }

    pub fn request_refresh(&mut self) {
        self.observer.on_refresh_requested();
    }

    fn move_to(&mut self, cursor: Cursor) -> Cursor {
        self.cursor = cursor;
        self.notify();
        cursor
    }

    fn notify(&mut self) {
        let meetings = meetings_at(&self.table, self.cursor, self.now);
        self.observer.on_slot_changed(self.cursor, &meetings);
    }
}

#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;
