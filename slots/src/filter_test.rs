use meetings::Meeting;

use super::*;

fn sample() -> Vec<Meeting> {
    vec![
        Meeting::new(1, 1, 540, "Sunrise Serenity"),
        Meeting::new(2, 1, 600, "Group Conscience").with_service(true),
        Meeting::new(3, 2, 1140, "Serenity Seekers"),
        Meeting::new(4, 3, 1200, "Big Book Study"),
    ]
}

fn ids(meetings: &[Meeting]) -> Vec<u64> {
    meetings.iter().map(|m| m.id).collect()
}

#[test]
fn default_filter_keeps_everything_in_order() {
    let filter = MeetingFilter::default();
    assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 3, 4]);
    assert!(!filter.excludes_service());
    assert!(!filter.attended_only());
    assert_eq!(filter.name_query(), None);
}

#[test]
fn exclude_service_drops_service_meetings() {
    let mut filter = MeetingFilter::default();
    filter.set_exclude_service(true);
    assert_eq!(ids(&filter.apply(&sample())), vec![1, 3, 4]);
}

#[test]
fn attended_only_keeps_marked_ids() {
    let mut filter = MeetingFilter::default();
    filter.set_attended([3, 4, 99]);
    assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 3, 4], "attendance alone does not filter");

    filter.set_attended_only(true);
    assert_eq!(ids(&filter.apply(&sample())), vec![3, 4]);

    filter.set_attendance(4, false);
    filter.set_attendance(1, true);
    assert_eq!(ids(&filter.apply(&sample())), vec![1, 3]);
    assert!(filter.is_attended(99));
}

#[test]
fn name_query_is_case_insensitive_substring() {
    let mut filter = MeetingFilter::default();
    filter.set_name_query(Some("  SERENITY "));
    assert_eq!(filter.name_query(), Some("serenity"));
    assert_eq!(ids(&filter.apply(&sample())), vec![1, 3]);

    filter.set_name_query(Some("   "));
    assert_eq!(filter.name_query(), None);
    assert_eq!(filter.apply(&sample()).len(), 4);
}

#[test]
fn filters_combine() {
    let mut filter = MeetingFilter::default();
    filter.set_exclude_service(true);
    filter.set_name_query(Some("o"));
    assert_eq!(ids(&filter.apply(&sample())), vec![4]);
}
