use chrono::{NaiveDate, NaiveDateTime};
use taskform_core::{TimeSlot, TimeSlotPicker};

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

#[test]
fn display_matches_the_form_range_format() {
    let slot = TimeSlot::new(at(2024, 5, 1, 10, 0), at(2024, 5, 1, 10, 30));
    assert_eq!(slot.display(), "May 1, 2024 at 10:00 AM - 10:30 AM");
}

#[test]
fn display_uses_twelve_hour_clock() {
    let slot = TimeSlot::new(at(2024, 12, 24, 13, 5), at(2024, 12, 24, 18, 45));
    assert_eq!(slot.display(), "Dec 24, 2024 at 1:05 PM - 6:45 PM");

    let midnight = TimeSlot::new(at(2024, 1, 2, 0, 0), at(2024, 1, 2, 12, 0));
    assert_eq!(midnight.display(), "Jan 2, 2024 at 12:00 AM - 12:00 PM");
}

#[test]
fn start_alone_does_not_commit() {
    let mut picker = TimeSlotPicker::new();
    assert!(picker.pick_start(at(2024, 5, 1, 10, 0)).is_none());
    assert_eq!(picker.start(), Some(at(2024, 5, 1, 10, 0)));
    assert!(picker.end().is_none());
}

#[test]
fn end_alone_does_not_commit() {
    let mut picker = TimeSlotPicker::new();
    assert!(picker.pick_end(at(2024, 5, 1, 10, 30)).is_none());
}

#[test]
fn second_endpoint_commits_the_range() {
    let mut picker = TimeSlotPicker::new();
    picker.pick_start(at(2024, 5, 1, 10, 0));
    let slot = picker.pick_end(at(2024, 5, 1, 10, 30)).unwrap();
    assert_eq!(slot.display(), "May 1, 2024 at 10:00 AM - 10:30 AM");
}

#[test]
fn repicking_start_with_end_present_recommits_immediately() {
    let mut picker = TimeSlotPicker::new();
    picker.pick_start(at(2024, 5, 1, 10, 0));
    picker.pick_end(at(2024, 5, 1, 10, 30));

    let slot = picker.pick_start(at(2024, 5, 2, 9, 0)).unwrap();
    assert_eq!(slot.display(), "May 2, 2024 at 9:00 AM - 10:30 AM");
}

#[test]
fn clear_returns_to_the_no_dates_state() {
    let mut picker = TimeSlotPicker::new();
    picker.pick_start(at(2024, 5, 1, 10, 0));
    picker.pick_end(at(2024, 5, 1, 10, 30));
    picker.clear();

    assert!(picker.start().is_none());
    assert!(picker.end().is_none());
    assert!(picker.pick_start(at(2024, 5, 1, 11, 0)).is_none());
}
