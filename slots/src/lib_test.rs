use super::*;

#[test]
fn slot_key_encodes_hour_and_minute() {
    assert_eq!(SlotKey::from_minutes(13 * 60 + 45).map(SlotKey::hhmm), Some(1345));
    assert_eq!(SlotKey::from_minutes(0).map(SlotKey::hhmm), Some(0));
    assert_eq!(SlotKey::from_minutes(1439).map(SlotKey::hhmm), Some(2359));
    assert_eq!(SlotKey::from_minutes(1440), None);
}

#[test]
fn slot_key_from_hhmm_rejects_impossible_clocks() {
    assert_eq!(SlotKey::from_hhmm(1900).map(SlotKey::minutes), Some(1140));
    assert_eq!(SlotKey::from_hhmm(1375), None);
    assert_eq!(SlotKey::from_hhmm(2400), None);
}

#[test]
fn slot_key_parse_and_display() {
    let key = SlotKey::parse("07:05").unwrap();
    assert_eq!(key.hhmm(), 705);
    assert_eq!(key.to_string(), "07:05");
    assert_eq!(SlotKey::parse("7pm"), None);
}

#[test]
fn slot_key_order_is_chronological() {
    let keys = ["23:00", "00:30", "09:59", "10:00"]
        .into_iter()
        .filter_map(SlotKey::parse)
        .collect::<std::collections::BTreeSet<_>>();
    let ordered = keys.into_iter().map(SlotKey::hhmm).collect::<Vec<_>>();
    assert_eq!(ordered, vec![30, 959, 1000, 2300]);
}

#[test]
fn weekday_names_cover_pseudo_day() {
    assert_eq!(weekday_name(0), "In progress");
    assert_eq!(weekday_name(1), "Sunday");
    assert_eq!(weekday_name(7), "Saturday");
    assert_eq!(weekday_name(8), "Unknown");
}

#[test]
fn parse_day_accepts_numbers_names_and_prefixes() {
    assert_eq!(parse_day("0"), Some(0));
    assert_eq!(parse_day("7"), Some(7));
    assert_eq!(parse_day("8"), None);
    assert_eq!(parse_day("live"), Some(0));
    assert_eq!(parse_day("Sun"), Some(1));
    assert_eq!(parse_day("tuesday"), Some(3));
    assert_eq!(parse_day("THU"), Some(5));
    assert_eq!(parse_day("sa"), None);
    assert_eq!(parse_day("funday"), None);
}

#[test]
fn time_of_week_validates_and_parses() {
    assert!(TimeOfWeek::new(0, 0).is_none());
    assert!(TimeOfWeek::new(8, 0).is_none());
    assert!(TimeOfWeek::new(1, 1440).is_none());

    let now = TimeOfWeek::parse("wed 14:30").unwrap();
    assert_eq!(now.weekday(), 4);
    assert_eq!(now.minute(), 14 * 60 + 30);
    assert_eq!(now.slot_key().hhmm(), 1430);
    assert_eq!(now.to_string(), "Wednesday 14:30");

    assert!(TimeOfWeek::parse("live 14:30").is_none(), "pseudo-day is not a point in the week");
    assert!(TimeOfWeek::parse("wed").is_none());
}

#[test]
fn minute_of_week_starts_sunday_midnight() {
    assert_eq!(TimeOfWeek::new(1, 0).unwrap().minute_of_week(), 0);
    assert_eq!(TimeOfWeek::new(2, 30).unwrap().minute_of_week(), 1440 + 30);
    assert_eq!(TimeOfWeek::new(7, 1439).unwrap().minute_of_week(), MINUTES_PER_WEEK - 1);
}

#[test]
fn week_start_is_sunday_midnight() {
    assert_eq!(Some(TimeOfWeek::WEEK_START), TimeOfWeek::new(1, 0));
    assert_eq!(TimeOfWeek::WEEK_START.minute_of_week(), 0);
}

#[test]
fn time_of_week_slot_key_matches_minute_key() {
    for minute in [0, 59, 60, 13 * 60 + 45, 1439] {
        let now = TimeOfWeek::new(4, minute).unwrap();
        assert_eq!(Some(now.slot_key()), SlotKey::from_minutes(minute));
    }
}
