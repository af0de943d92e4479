//! Day-sequence generation.

use crate::date::Date;
use pont_core::{ensure, Integer, Result, Year};

/// Iterator over consecutive dates, stepping by a fixed number of days and
/// stopping after the last date (inclusive).
#[derive(Debug, Clone)]
pub struct DateSteps {
    next: Option<Date>,
    last: Date,
    step: Integer,
}

impl Iterator for DateSteps {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        if current > self.last {
            self.next = None;
            return None;
        }
        // Stepping past Date::MAX simply ends the sequence.
        self.next = current.add_days(self.step).ok();
        Some(current)
    }
}

/// Dates from `first` to `last` inclusive, `step` days apart.
///
/// # Errors
/// [`Error::Precondition`](pont_core::Error::Precondition) if `step` is not
/// positive.
pub fn date_steps(first: Date, last: Date, step: Integer) -> Result<DateSteps> {
    ensure!(step > 0, "date step must be positive, got {step}");
    Ok(DateSteps {
        next: Some(first),
        last,
        step,
    })
}

/// Every day of `year` in ascending order, January 1 to December 31.
///
/// # Example
///
/// ```
/// use pont_time::year_days;
///
/// assert_eq!(year_days(2024).unwrap().count(), 366);
/// assert_eq!(year_days(2025).unwrap().count(), 365);
/// ```
pub fn year_days(year: Year) -> Result<DateSteps> {
    date_steps(Date::first_of_year(year)?, Date::last_of_year(year)?, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_year_bounds() {
        let days: Vec<Date> = year_days(2025).unwrap().collect();
        assert_eq!(days.len(), 365);
        assert_eq!(days[0], Date::from_ymd(2025, 1, 1).unwrap());
        assert_eq!(*days.last().unwrap(), Date::from_ymd(2025, 12, 31).unwrap());
        assert!(days.windows(2).all(|w| w[1] - w[0] == 1));
    }

    #[test]
    fn weekly_steps_stop_at_last() {
        let first = Date::from_ymd(2025, 12, 1).unwrap();
        let last = Date::from_ymd(2025, 12, 31).unwrap();
        let mondays: Vec<Date> = date_steps(first, last, 7).unwrap().collect();
        assert_eq!(mondays.len(), 5); // 1, 8, 15, 22, 29
        assert_eq!(mondays[4], Date::from_ymd(2025, 12, 29).unwrap());
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let day = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(date_steps(day, day, 0).is_err());
        assert!(date_steps(day, day, -7).is_err());
    }

    #[test]
    fn last_supported_year_terminates() {
        assert_eq!(year_days(Date::MAX_YEAR).unwrap().count(), 365);
    }

    #[test]
    fn unsupported_year_is_error() {
        assert!(year_days(1850).is_err());
    }
}
