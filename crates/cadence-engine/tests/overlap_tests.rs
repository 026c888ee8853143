//! Tests for the pairwise overlap predicate.

use cadence_engine::activity::Activity;
use cadence_engine::overlaps;
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

/// Helper: a weekly recurring activity.
fn recurring(day: Weekday, time_slot: &str, duration_minutes: u32) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        title: "Morning Run".to_string(),
        description: None,
        category: "fitness".to_string(),
        day_of_week: day,
        time_slot: time_slot.to_string(),
        duration_minutes,
        is_recurring: true,
        specific_date: None,
        completed: false,
    }
}

/// Helper: a one-off activity on a specific date (or the dateless legacy
/// state when `date` is None).
fn dated(day: Weekday, time_slot: &str, duration_minutes: u32, date: Option<&str>) -> Activity {
    let mut a = recurring(day, time_slot, duration_minutes);
    a.is_recurring = false;
    a.specific_date = date.map(|d| d.parse::<NaiveDate>().unwrap());
    a
}

#[test]
fn an_activity_overlaps_itself() {
    let a = recurring(Weekday::Mon, "09:00", 60);
    assert!(overlaps(&a, &a).unwrap());

    let b = dated(Weekday::Mon, "09:00", 60, Some("2026-03-02"));
    assert!(overlaps(&b, &b).unwrap());
}

#[test]
fn different_weekdays_never_conflict() {
    // Same times, same dates even — the weekday gate wins.
    let a = recurring(Weekday::Mon, "09:00", 60);
    let b = recurring(Weekday::Tue, "09:00", 60);
    assert!(!overlaps(&a, &b).unwrap());

    let c = dated(Weekday::Wed, "09:00", 60, Some("2026-03-04"));
    assert!(!overlaps(&a, &c).unwrap());
}

#[test]
fn same_day_overlapping_intervals_conflict() {
    // 09:00-10:00 vs 09:30-10:00
    let a = recurring(Weekday::Mon, "09:00", 60);
    let b = recurring(Weekday::Mon, "09:30", 30);
    assert!(overlaps(&a, &b).unwrap());
}

#[test]
fn back_to_back_is_not_a_conflict() {
    // a ends exactly when b starts.
    let a = recurring(Weekday::Mon, "09:00", 60);
    let b = recurring(Weekday::Mon, "10:00", 30);
    assert!(!overlaps(&a, &b).unwrap());
    assert!(!overlaps(&b, &a).unwrap());
}

#[test]
fn containment_is_a_conflict() {
    // 09:00-12:00 fully contains 10:00-11:00.
    let a = recurring(Weekday::Mon, "09:00", 180);
    let b = recurring(Weekday::Mon, "10:00", 60);
    assert!(overlaps(&a, &b).unwrap());
    assert!(overlaps(&b, &a).unwrap());
}

#[test]
fn specific_dates_differ_no_conflict() {
    // Two Mondays a week apart, same clock interval.
    let a = dated(Weekday::Mon, "09:00", 60, Some("2026-03-02"));
    let b = dated(Weekday::Mon, "09:30", 60, Some("2026-03-09"));
    assert!(!overlaps(&a, &b).unwrap());
}

#[test]
fn same_specific_date_conflicts() {
    let a = dated(Weekday::Mon, "09:00", 60, Some("2026-03-02"));
    let b = dated(Weekday::Mon, "09:30", 60, Some("2026-03-02"));
    assert!(overlaps(&a, &b).unwrap());
}

#[test]
fn recurring_blocks_every_date_on_its_weekday() {
    // A weekly Monday activity conflicts with any Monday one-off,
    // whatever its date.
    let weekly = recurring(Weekday::Mon, "09:00", 60);
    for date in ["2026-03-02", "2026-03-09", "2026-03-16"] {
        let one_off = dated(Weekday::Mon, "09:30", 30, Some(date));
        assert!(overlaps(&weekly, &one_off).unwrap());
        assert!(overlaps(&one_off, &weekly).unwrap());
    }
}

#[test]
fn dateless_entry_matches_no_date() {
    // The legacy state: non-recurring with no date. It never meets another
    // specific entry on date grounds, dateless or not — including itself.
    let legacy = dated(Weekday::Mon, "09:00", 60, None);
    let other_legacy = dated(Weekday::Mon, "09:30", 60, None);
    let pinned = dated(Weekday::Mon, "09:30", 60, Some("2026-03-02"));

    assert!(!overlaps(&legacy, &other_legacy).unwrap());
    assert!(!overlaps(&legacy, &pinned).unwrap());
    assert!(!overlaps(&legacy, &legacy).unwrap());
}

#[test]
fn recurring_override_still_blocks_dateless_entry() {
    let legacy = dated(Weekday::Mon, "09:00", 60, None);
    let weekly = recurring(Weekday::Mon, "09:30", 60);
    assert!(overlaps(&legacy, &weekly).unwrap());
    assert!(overlaps(&weekly, &legacy).unwrap());
}

#[test]
fn interval_past_midnight_stays_on_the_same_day() {
    // 23:00 + 120min conceptually ends at 25:00; it still collides with a
    // late slot on the same day, and next-day semantics are not applied.
    let late = recurring(Weekday::Mon, "23:00", 120);
    let later = recurring(Weekday::Mon, "23:30", 30);
    assert!(overlaps(&late, &later).unwrap());

    // An early Tuesday slot is a different weekday — no conflict, even
    // though the wall-clock interval would spill into it.
    let tuesday_early = recurring(Weekday::Tue, "00:30", 60);
    assert!(!overlaps(&late, &tuesday_early).unwrap());
}

#[test]
fn malformed_time_slot_is_an_error() {
    let a = recurring(Weekday::Mon, "9am", 60);
    let b = recurring(Weekday::Mon, "09:30", 30);
    assert!(overlaps(&a, &b).is_err());
    assert!(overlaps(&b, &a).is_err());
}

#[test]
fn weekday_gate_short_circuits_before_parsing() {
    // Different weekdays return false before time strings are touched.
    let a = recurring(Weekday::Mon, "not a time", 60);
    let b = recurring(Weekday::Tue, "09:30", 30);
    assert!(!overlaps(&a, &b).unwrap());
}
