//! Gap filling: spend whatever quota is left on the earliest free weekdays.

use crate::leave::LeaveReason;
use crate::ledger::ClaimLedger;
use pont_core::{Result, Size};
use pont_time::year_days;

/// Claim free weekdays in date order until the quota or the year runs out.
///
/// Returns the number of days claimed.
pub fn claim_gaps(ledger: &mut ClaimLedger<'_>) -> Result<Size> {
    let before = ledger.used();
    for day in year_days(ledger.year())? {
        if ledger.remaining() == 0 {
            break;
        }
        ledger.claim(day, LeaveReason::Gap);
    }
    Ok(ledger.used() - before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pont_time::{Date, Holiday, HolidayIndex};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn earliest_weekdays_skipping_holidays_and_claims() {
        let cal = HolidayIndex::from_holidays("x", [Holiday::new(date(2025, 1, 1), "New Year")]);
        let mut ledger = ClaimLedger::new(2025, 3, &cal);
        assert!(ledger.claim(date(2025, 1, 2), LeaveReason::Bridge));
        assert_eq!(claim_gaps(&mut ledger).unwrap(), 2);
        // 1 Jan holiday, 2 Jan taken, 4–5 Jan weekend.
        assert!(ledger.is_claimed(date(2025, 1, 3)));
        assert!(ledger.is_claimed(date(2025, 1, 6)));
        assert_eq!(ledger.remaining(), 0);
    }

    #[test]
    fn stops_when_year_has_no_room() {
        let cal = pont_time::WeekendsOnly;
        let mut ledger = ClaimLedger::new(2025, 300, &cal);
        assert_eq!(claim_gaps(&mut ledger).unwrap(), 261);
        assert_eq!(ledger.remaining(), 39);
    }
}
