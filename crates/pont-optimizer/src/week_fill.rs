//! Whole-week filling.
//!
//! Steps through the year seven days at a time from 1 January and takes
//! every five-day block whose days are all free, five days of quota at a
//! time.  A block starting on any day but Monday always contains a weekend
//! day, so weeks are only ever filled in years that begin on a Monday.

use crate::leave::LeaveReason;
use crate::ledger::ClaimLedger;
use pont_core::{Result, Size};
use pont_time::{date_steps, Date};
use tracing::debug;

/// Days in a working week.
pub const WEEK_LEN: Size = 5;

/// Claim whole free working weeks while at least [`WEEK_LEN`] days of quota
/// remain.
///
/// Returns the number of days claimed (a multiple of [`WEEK_LEN`]).
pub fn claim_weeks(ledger: &mut ClaimLedger<'_>) -> Result<Size> {
    let before = ledger.used();
    let first = Date::first_of_year(ledger.year())?;
    let last = Date::last_of_year(ledger.year())?;

    for start in date_steps(first, last, 7)? {
        if ledger.remaining() < WEEK_LEN {
            break;
        }
        // A block running past the end of the supported range is never free.
        let Ok(block) = (0..WEEK_LEN as i32)
            .map(|i| start.add_days(i))
            .collect::<Result<Vec<Date>>>()
        else {
            break;
        };
        if ledger.claim_all(&block, LeaveReason::WeekFill) {
            debug!(from = %start, "free week");
        }
    }
    Ok(ledger.used() - before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pont_time::{Holiday, HolidayIndex, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn takes_the_first_free_weeks() {
        // 1 January 2024 is a Monday; room for two weeks.
        let cal = WeekendsOnly;
        let mut ledger = ClaimLedger::new(2024, 12, &cal);
        assert_eq!(claim_weeks(&mut ledger).unwrap(), 10);
        assert!(ledger.is_claimed(date(2024, 1, 1)));
        assert!(ledger.is_claimed(date(2024, 1, 12)));
        assert!(!ledger.is_claimed(date(2024, 1, 15)));
        assert_eq!(ledger.remaining(), 2);
    }

    #[test]
    fn year_not_starting_on_monday_has_no_free_week() {
        // 1 January 2025 is a Wednesday: every block from it spans a weekend.
        let cal = WeekendsOnly;
        let mut ledger = ClaimLedger::new(2025, 1000, &cal);
        assert_eq!(claim_weeks(&mut ledger).unwrap(), 0);
        assert_eq!(ledger.used(), 0);
    }

    #[test]
    fn week_with_holiday_or_claim_is_skipped() {
        let cal = HolidayIndex::from_holidays("x", [Holiday::new(date(2024, 1, 3), "h")]);
        let mut ledger = ClaimLedger::new(2024, 6, &cal);
        assert!(ledger.claim(date(2024, 1, 12), LeaveReason::Bridge));
        assert_eq!(claim_weeks(&mut ledger).unwrap(), 5);
        // Weeks of 1 Jan (holiday) and 8 Jan (claimed Friday) are skipped.
        assert!(!ledger.is_claimed(date(2024, 1, 1)));
        assert!(!ledger.is_claimed(date(2024, 1, 8)));
        assert!(ledger.is_claimed(date(2024, 1, 15)));
        assert!(ledger.is_claimed(date(2024, 1, 19)));
    }

    #[test]
    fn nothing_below_a_full_week() {
        let cal = WeekendsOnly;
        let mut ledger = ClaimLedger::new(2024, 4, &cal);
        assert_eq!(claim_weeks(&mut ledger).unwrap(), 0);
    }

    #[test]
    fn year_end_week_stays_in_year() {
        // The last Monday of 2024 is 30 December; that block runs into 2025.
        let cal = WeekendsOnly;
        let mut ledger = ClaimLedger::new(2024, 1000, &cal);
        assert_eq!(claim_weeks(&mut ledger).unwrap(), 52 * WEEK_LEN);
        assert!(ledger.is_claimed(date(2024, 12, 27)));
        assert!(!ledger.is_claimed(date(2024, 12, 30)));
    }
}
