use meetings::Meeting;

use super::*;
use crate::build;

fn at(id: u64, weekday: u8, hhmm: u16) -> Meeting {
    Meeting::new(id, weekday, (hhmm / 100) * 60 + hhmm % 100, format!("meeting-{id}"))
}

fn cur(day: u8, slot: usize) -> Cursor {
    Cursor::new(day, slot).unwrap()
}

/// Sunday: 2 slots, Monday: empty, Tuesday: 1 slot, Saturday: 3 slots.
fn week() -> DaySlotTable {
    build(&[
        at(1, 1, 900),
        at(2, 1, 1900),
        at(3, 3, 1200),
        at(4, 7, 800),
        at(5, 7, 1300),
        at(6, 7, 2100),
    ])
}

#[test]
fn cursor_new_rejects_days_past_saturday() {
    assert!(Cursor::new(8, 0).is_none());
    assert_eq!(Cursor::new(0, 3).map(Cursor::is_in_progress), Some(true));
    assert_eq!(Cursor::in_progress().day(), 0);
}

#[test]
fn next_walks_slots_then_days() {
    let table = week();
    assert_eq!(next(&table, cur(1, 0)), cur(1, 1));
    assert_eq!(next(&table, cur(1, 1)), cur(2, 0));
    assert_eq!(next(&table, cur(2, 0)), cur(3, 0), "empty day is a single stop");
    assert_eq!(next(&table, cur(3, 0)), cur(4, 0));
}

#[test]
fn next_from_pseudo_day_enters_sunday() {
    let table = week();
    assert_eq!(next(&table, Cursor::in_progress()), cur(1, 0));
    assert_eq!(next(&table, cur(0, 2)), cur(1, 0));
}

#[test]
fn next_from_saturday_last_wraps_to_pseudo_day() {
    let table = week();
    let wrapped = next(&table, cur(7, 2));
    assert!(wrapped.is_in_progress());
    assert_eq!(wrapped.slot(), 2, "keeps the pre-increment slot");
}

#[test]
fn next_repeatedly_cycles_the_whole_ring() {
    let table = week();
    let mut cursor = cur(7, 2);
    let mut days = Vec::new();
    for _ in 0..9 {
        cursor = next(&table, cursor);
        days.push(cursor.day());
    }
    // Pseudo-day, Sunday x2, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday.
    assert_eq!(days, vec![0, 1, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn previous_walks_back_through_days() {
    let table = week();
    assert_eq!(previous(&table, cur(7, 1)), cur(7, 0));
    assert_eq!(previous(&table, cur(7, 0)), cur(6, 0));
    assert_eq!(previous(&table, cur(4, 0)), cur(3, 0));
    assert_eq!(previous(&table, cur(2, 0)), cur(1, 1), "lands on previous day's last slot");
}

#[test]
fn previous_from_sunday_enters_pseudo_day() {
    assert_eq!(previous(&week(), cur(1, 0)), Cursor::in_progress());
}

#[test]
fn previous_from_pseudo_day_lands_on_saturday_last() {
    assert_eq!(previous(&week(), Cursor::in_progress()), cur(7, 2));
    assert_eq!(previous(&build(&[]), Cursor::in_progress()), cur(7, 0));
}

#[test]
fn previous_clamps_stale_slot() {
    assert_eq!(previous(&week(), cur(1, 9)), cur(1, 1));
}

#[test]
fn next_clamps_stale_slot() {
    let table = week();
    assert_eq!(next(&table, cur(3, usize::MAX)), cur(4, 0));
    assert_eq!(next(&table, cur(1, 9)), cur(2, 0));

    let wrapped = next(&table, cur(7, usize::MAX));
    assert!(wrapped.is_in_progress());
    assert_eq!(wrapped.slot(), 2);
}

#[test]
fn next_then_previous_is_identity_away_from_pseudo_day() {
    let table = week();
    for day in 1..=7u8 {
        for slot in 0..table.slot_count(day).max(1) {
            let start = cur(day, slot);
            if day == 7 && slot == table.last_slot_index(7) {
                continue;
            }
            assert_eq!(previous(&table, next(&table, start)), start, "{start:?}");
        }
    }
}

#[test]
fn clamped_pulls_slot_into_range() {
    let table = week();
    assert_eq!(cur(1, 5).clamped(&table), cur(1, 1));
    assert_eq!(cur(2, 5).clamped(&table), cur(2, 0));
    assert_eq!(cur(0, 5).clamped(&table), cur(0, 5));
}

#[test]
fn jump_to_now_uses_nearest_slot() {
    let table = week();
    let now = TimeOfWeek::new(7, 12 * 60).unwrap();
    assert_eq!(jump_to_now(&table, now), cur(7, 1));
}

#[test]
fn jump_to_now_on_empty_table_is_slot_zero() {
    let now = TimeOfWeek::new(4, 17 * 60).unwrap();
    assert_eq!(jump_to_now(&build(&[]), now), cur(4, 0));
}

#[test]
fn jump_to_explicit_day() {
    let table = week();
    let evening = SlotKey::from_hhmm(1800).unwrap();
    assert_eq!(jump_to(&table, 1, evening), Some(cur(1, 1)));
    assert_eq!(jump_to(&table, 0, evening), Some(Cursor::in_progress()));
    assert_eq!(jump_to(&table, 8, evening), None);
}

#[test]
fn jump_to_round_trips_through_meetings_at() {
    let table = week();
    let now = TimeOfWeek::new(1, 0).unwrap();
    let target = SlotKey::from_hhmm(1400).unwrap();
    let cursor = jump_to(&table, 7, target).unwrap();
    let shown = crate::meetings_at(&table, cursor, now);
    assert!(!shown.is_empty());
    assert!(shown.iter().all(|m| m.weekday == 7 && m.start_minute == 13 * 60));
}
