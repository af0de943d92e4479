//! Bridge detection.
//!
//! A Tuesday holiday is bridged by taking the Monday before it off, a
//! Thursday holiday by taking the Friday after it: one leave day turns a
//! single holiday into a four-day weekend.  Holidays are visited in the
//! order the holiday source listed them, which decides who wins when the
//! quota runs out.

use crate::leave::LeaveReason;
use crate::ledger::ClaimLedger;
use pont_core::Size;
use pont_time::{Date, Holiday, Weekday};
use tracing::debug;

/// The day that would bridge `holiday` to the nearest weekend, if any.
///
/// Candidates that would fall outside the supported date range are `None`.
pub fn bridge_candidate(holiday: Date) -> Option<Date> {
    match holiday.weekday() {
        Weekday::Tuesday => holiday.add_days(-1).ok(),
        Weekday::Thursday => holiday.add_days(1).ok(),
        _ => None,
    }
}

/// Claim bridge days for `holidays`, in order, until the quota is spent.
///
/// Returns the number of days claimed.
pub fn claim_bridges<'h>(
    ledger: &mut ClaimLedger<'_>,
    holidays: impl IntoIterator<Item = &'h Holiday>,
) -> Size {
    let before = ledger.used();
    for holiday in holidays {
        if ledger.remaining() == 0 {
            debug!(at = %holiday.date, "quota spent during bridge search");
            break;
        }
        let Some(candidate) = bridge_candidate(holiday.date) else {
            continue;
        };
        // The ledger rejects candidates outside the year, on another
        // holiday, or already bridged by a duplicate.
        if ledger.claim(candidate, LeaveReason::Bridge) {
            debug!(holiday = %holiday.date, name = %holiday.local_name, bridge = %candidate, "bridge");
        }
    }
    ledger.used() - before
}
