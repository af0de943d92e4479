//! # pont-time
//!
//! Date, weekday, calendar, holiday-index, and month-grid types.
//!
//! Everything here works at day granularity: a [`Date`] has no time of day
//! and no timezone, so equality, ordering, and hashing are plain value
//! comparisons.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Rule-based country calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Holiday`, `HolidayRecord`, and `HolidayIndex`.
pub mod holiday;

/// `Month`: month of the year.
pub mod month;

/// `MonthMatrix`: a month laid out in weeks.
pub mod month_matrix;

/// Day-sequence generation.
pub mod sequence;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::{by_country_code, for_country, PublicHolidays, SUPPORTED_COUNTRIES};
pub use date::Date;
pub use holiday::{Holiday, HolidayIndex, HolidayRecord};
pub use month::Month;
pub use month_matrix::{MonthMatrix, Week};
pub use sequence::{date_steps, year_days, DateSteps};
pub use weekday::Weekday;
