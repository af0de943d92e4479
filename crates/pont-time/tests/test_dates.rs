//! Integration tests for `Date`, `Weekday`, and day sequences.

use proptest::prelude::*;

use pont_time::{year_days, Date, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn year_sequence_matches_calendar_length() {
    for year in [1901u16, 1999, 2000, 2024, 2025, 2100, 2199] {
        let days: Vec<Date> = year_days(year).unwrap().collect();
        let expected = if pont_time::date::is_leap_year(year) { 366 } else { 365 };
        assert_eq!(days.len(), expected, "{year}");
        assert!(days.iter().all(|d| d.year() == year));
    }
}

#[test]
fn weekdays_cycle_through_a_week() {
    // 2025-06-02 is a Monday
    let start = date(2025, 6, 2);
    let names: Vec<Weekday> = (0..7).map(|i| (start + i).weekday()).collect();
    assert_eq!(
        names,
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    );
}

#[test]
fn equality_is_by_calendar_day() {
    let parsed = Date::parse_iso("2025-03-30").unwrap();
    let built = date(2025, 3, 29) + 1;
    // 30 March 2025 is the EU daylight-saving switch; a day value has no
    // clock to shift.
    assert_eq!(parsed, built);
    let mut set = std::collections::HashSet::new();
    set.insert(parsed);
    assert!(set.contains(&built));
}

#[test]
fn serde_uses_iso_strings() {
    let d = date(2025, 11, 11);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-11-11\"");
    let back: Date = serde_json::from_str("\"2025-11-11\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2025-11-31\"").is_err());
}

proptest! {
    #[test]
    fn add_days_moves_serial_and_weekday(serial in 366i32..109_000, n in -300i32..300) {
        let d = Date::from_serial(serial).unwrap();
        let moved = d.add_days(n).unwrap();
        prop_assert_eq!(moved - d, n);
        let expected = (d.weekday().ordinal() as i32 - 1 + n).rem_euclid(7) + 1;
        prop_assert_eq!(moved.weekday().ordinal() as i32, expected);
    }

    #[test]
    fn ymd_reconstructs_the_same_day(serial in 366i32..=109_573) {
        let d = Date::from_serial(serial).unwrap();
        let rebuilt = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, d);
        prop_assert_eq!(Date::parse_iso(&d.to_string()).unwrap(), d);
    }
}
