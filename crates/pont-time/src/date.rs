//! `Date` type.
//!
//! Dates are stored as a serial day number so that equality, ordering and
//! hashing all work at day granularity: there is no time-of-day and no
//! timezone, so two dates are equal exactly when their (year, month, day)
//! match.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The supported range is 1901-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::weekday::Weekday;
use pont_core::errors::{Error, Result};
use pont_core::{Integer, Year};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest supported year.
    pub const MIN_YEAR: Year = 1901;

    /// Largest supported year.
    pub const MAX_YEAR: Year = 2199;

    /// Minimum valid date: January 1, 1901.
    pub const MIN: Date = Date(366);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns [`Error::Date`] when the year is unsupported or the month/day
    /// do not exist in the calendar (e.g. 31 February).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    ///
    /// Only the plain calendar form is accepted; a trailing time component
    /// is rejected rather than silently truncated.
    pub fn parse_iso(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(Error::Date(format!("'{text}' is not a YYYY-MM-DD date")));
        }
        // All three fields are ASCII digits at this point.
        let field = |range: std::ops::Range<usize>| -> Result<u16> {
            text[range]
                .parse::<u16>()
                .map_err(|e| Error::Date(format!("'{text}': {e}")))
        };
        let year = field(0..4)?;
        let month = field(5..7)? as u8;
        let day = field(8..10)? as u8;
        Self::from_ymd(year, month, day)
    }

    /// Narrow a caller-supplied year to a supported [`Year`].
    ///
    /// # Errors
    /// [`Error::InvalidYear`] outside `MIN_YEAR..=MAX_YEAR`.
    pub fn check_year(year: i64) -> Result<Year> {
        if !(Self::MIN_YEAR as i64..=Self::MAX_YEAR as i64).contains(&year) {
            return Err(Error::InvalidYear {
                year,
                min: Self::MIN_YEAR,
                max: Self::MAX_YEAR,
            });
        }
        Ok(year as Year)
    }

    /// January 1 of `year`.
    pub fn first_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn last_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` if the date falls on Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` days (negative `n` moves backwards).
    ///
    /// Returns an error if the result leaves the supported range.
    pub fn add_days(self, n: Integer) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))
            .and_then(Self::from_serial)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<Integer> for Date {
    type Output = Self;
    fn add(self, rhs: Integer) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<Integer> for Date {
    type Output = Self;
    fn sub(self, rhs: Integer) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Integer;
    fn sub(self, rhs: Date) -> Integer {
        self.0 - rhs.0
    }
}

// ── Text forms ────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse_iso(&text).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!(),
    }
}

/// Serial of December 31 of the previous year (0 for 1900).
fn days_before_year(year: Year) -> i32 {
    let y = year as i32;
    // 1900 is not a leap year, so leap days are counted from 1901 on.
    (y - 1900) * 365 + (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let mut serial = days_before_year(year) + MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    let mut y = (serial / 365 + 1900) as Year;
    while serial <= days_before_year(y) {
        y -= 1;
    }
    while serial > days_before_year(y + 1) {
        y += 1;
    }
    let mut remaining = serial - days_before_year(y);
    let mut m = 1u8;
    while remaining > days_in_month(y, m) as i32 {
        remaining -= days_in_month(y, m) as i32;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
