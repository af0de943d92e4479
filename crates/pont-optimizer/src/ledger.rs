//! Claimed-day ledger shared by the allocation phases.
//!
//! One ledger lives for exactly one optimization run.  It owns the set of
//! claimed dates and the quota counter, and refuses any claim that would
//! break the result invariants: every claimed day lies in the target year,
//! is a business day of the holiday calendar, is claimed at most once, and
//! the number of claims never exceeds the quota.

use std::collections::HashMap;

use crate::leave::{LeaveDay, LeaveReason};
use pont_core::{Size, Year};
use pont_time::{Calendar, Date};
use tracing::trace;

/// Claimed days and remaining quota for one optimization run.
#[derive(Debug)]
pub struct ClaimLedger<'a> {
    year: Year,
    quota: Size,
    calendar: &'a dyn Calendar,
    claims: HashMap<Date, LeaveReason>,
}

impl<'a> ClaimLedger<'a> {
    /// Start an empty ledger for `year` with `quota` days to spend.
    pub fn new(year: Year, quota: Size, calendar: &'a dyn Calendar) -> Self {
        Self {
            year,
            quota,
            calendar,
            claims: HashMap::with_capacity(quota.min(366)),
        }
    }

    /// The target year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Days claimed so far.
    pub fn used(&self) -> Size {
        self.claims.len()
    }

    /// Days still available.
    pub fn remaining(&self) -> Size {
        self.quota - self.claims.len()
    }

    /// Return `true` if `date` has already been claimed.
    pub fn is_claimed(&self, date: Date) -> bool {
        self.claims.contains_key(&date)
    }

    /// Return `true` if `date` could be claimed: in the target year, a
    /// business day, and not yet claimed.  Quota is not considered.
    pub fn is_eligible(&self, date: Date) -> bool {
        date.year() == self.year && self.calendar.is_business_day(date) && !self.is_claimed(date)
    }

    /// Claim a single day.  Returns `false` and leaves the ledger unchanged
    /// if the day is not eligible or the quota is spent.
    pub fn claim(&mut self, date: Date, reason: LeaveReason) -> bool {
        if self.remaining() == 0 || !self.is_eligible(date) {
            return false;
        }
        trace!(%date, %reason, "claimed");
        self.claims.insert(date, reason);
        true
    }

    /// Claim every day in `days` with `reason`, or none of them.
    pub fn claim_all(&mut self, days: &[Date], reason: LeaveReason) -> bool {
        let distinct = days.iter().enumerate().all(|(i, d)| !days[..i].contains(d));
        if days.len() > self.remaining() || !distinct || !days.iter().all(|&d| self.is_eligible(d)) {
            return false;
        }
        for &date in days {
            trace!(%date, %reason, "claimed");
            self.claims.insert(date, reason);
        }
        true
    }

    /// The claimed days in date order.
    pub fn into_leave_days(self) -> Vec<LeaveDay> {
        let mut days: Vec<LeaveDay> = self
            .claims
            .into_iter()
            .map(|(date, reason)| LeaveDay { date, reason })
            .collect();
        days.sort_unstable_by_key(|d| d.date);
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pont_time::{Holiday, HolidayIndex};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn labour_day() -> HolidayIndex {
        HolidayIndex::from_holidays("test", [Holiday::new(date(2025, 5, 1), "Labour Day")])
    }

    #[test]
    fn rejects_holidays_weekends_and_other_years() {
        let cal = labour_day();
        let mut ledger = ClaimLedger::new(2025, 10, &cal);
        assert!(!ledger.claim(date(2025, 5, 1), LeaveReason::Gap)); // holiday
        assert!(!ledger.claim(date(2025, 5, 3), LeaveReason::Gap)); // Saturday
        assert!(!ledger.claim(date(2026, 1, 2), LeaveReason::Gap)); // next year
        assert!(ledger.claim(date(2025, 5, 2), LeaveReason::Bridge));
        assert!(!ledger.claim(date(2025, 5, 2), LeaveReason::Gap)); // already claimed
        assert_eq!(ledger.used(), 1);
        assert_eq!(ledger.remaining(), 9);
    }

    #[test]
    fn quota_caps_claims() {
        let cal = labour_day();
        let mut ledger = ClaimLedger::new(2025, 1, &cal);
        assert!(ledger.claim(date(2025, 1, 2), LeaveReason::Gap));
        assert!(!ledger.claim(date(2025, 1, 3), LeaveReason::Gap));
        assert_eq!(ledger.remaining(), 0);
    }

    #[test]
    fn claim_all_is_atomic() {
        let cal = labour_day();
        let mut ledger = ClaimLedger::new(2025, 25, &cal);
        // Week of 28 April contains the 1 May holiday.
        let week: Vec<Date> = (0..5).map(|i| date(2025, 4, 28) + i).collect();
        assert!(!ledger.claim_all(&week, LeaveReason::WeekFill));
        assert_eq!(ledger.used(), 0);

        let free: Vec<Date> = (0..5).map(|i| date(2025, 5, 5) + i).collect();
        assert!(ledger.claim_all(&free, LeaveReason::WeekFill));
        assert_eq!(ledger.used(), 5);

        let repeated = [date(2025, 6, 2), date(2025, 6, 2)];
        assert!(!ledger.claim_all(&repeated, LeaveReason::Gap));
    }

    #[test]
    fn leave_days_come_out_sorted() {
        let cal = labour_day();
        let mut ledger = ClaimLedger::new(2025, 3, &cal);
        ledger.claim(date(2025, 9, 1), LeaveReason::Gap);
        ledger.claim(date(2025, 2, 3), LeaveReason::Gap);
        ledger.claim(date(2025, 5, 2), LeaveReason::Bridge);
        let dates: Vec<Date> = ledger.into_leave_days().iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2025, 2, 3), date(2025, 5, 2), date(2025, 9, 1)]);
    }
}
