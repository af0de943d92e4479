//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar knows which dates are business days.  Leave can only be spent
//! on business days, so the optimizer asks its holiday calendar rather than
//! testing weekends and holidays separately.

use crate::date::Date;
use crate::sequence::year_days;
use pont_core::{Result, Size, Year};

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"France"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a public holiday in this calendar.
    ///
    /// Weekends are not holidays unless a holiday happens to fall on one.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Number of business days in `year`: the upper bound on how many
    /// leave days can be spent that year.
    fn business_days_in_year(&self, year: Year) -> Result<Size> {
        Ok(year_days(year)?.filter(|&d| self.is_business_day(d)).count())
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2025-05-03 is a Saturday
        assert!(!cal.is_business_day(date(2025, 5, 3)));
        assert!(!cal.is_holiday(date(2025, 5, 3)));
        assert!(cal.is_business_day(date(2025, 5, 5)));
    }

    #[test]
    fn business_days_in_year() {
        // 2025 starts on a Wednesday: 52 full weeks plus Wed 31 Dec.
        assert_eq!(WeekendsOnly.business_days_in_year(2025).unwrap(), 261);
        // 2024 is a leap year starting on Monday: 52 weeks plus Mon/Tue.
        assert_eq!(WeekendsOnly.business_days_in_year(2024).unwrap(), 262);
    }
}
