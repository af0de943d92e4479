//! The three-phase allocation pipeline.
//!
//! ```text
//! HolidayIndex ──► bridges ──► whole weeks ──► gaps ──► OptimizationResult
//!                     └──────── one ClaimLedger per run ────────┘
//! ```
//!
//! Each phase only adds to the ledger, so a day claimed early is never
//! reconsidered and the used count only grows.

use crate::bridge::claim_bridges;
use crate::gap_fill::claim_gaps;
use crate::ledger::ClaimLedger;
use crate::result::OptimizationResult;
use crate::week_fill::claim_weeks;
use pont_core::errors::{Error, Result};
use pont_core::{ensure_post, Size, Year};
use pont_time::{Calendar, Date, HolidayIndex, HolidayRecord};
use tracing::{debug, info};

/// Default yearly paid-leave quota.
pub const DEFAULT_QUOTA: Size = 25;

/// Allocates a fixed leave quota over a year of holidays.
///
/// Holds no state between runs; the same inputs always give the same plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveOptimizer {
    quota: Size,
}

impl Default for LeaveOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTA)
    }
}

impl LeaveOptimizer {
    /// An optimizer spending `quota` days per year.
    pub fn new(quota: Size) -> Self {
        Self { quota }
    }

    /// An optimizer for a caller-supplied, possibly negative, quota.
    ///
    /// # Errors
    /// [`Error::NegativeQuota`] if `quota < 0`.
    pub fn with_quota(quota: i64) -> Result<Self> {
        Size::try_from(quota)
            .map(Self::new)
            .map_err(|_| Error::NegativeQuota(quota))
    }

    /// The quota spent per run.
    pub fn quota(&self) -> Size {
        self.quota
    }

    /// Plan leave for `year` around `holidays`.
    ///
    /// Holidays outside `year` are kept: they never coincide with a day of
    /// the plan but can still propose a bridge day inside it.
    pub fn optimize(&self, year: Year, holidays: &HolidayIndex) -> Result<OptimizationResult> {
        Date::check_year(year.into())?;
        let mut ledger = ClaimLedger::new(year, self.quota, holidays);

        let bridges = claim_bridges(&mut ledger, holidays);
        debug!(year, claimed = bridges, remaining = ledger.remaining(), "bridge phase done");
        let weeks = claim_weeks(&mut ledger)?;
        debug!(year, claimed = weeks, remaining = ledger.remaining(), "week phase done");
        let gaps = claim_gaps(&mut ledger)?;
        debug!(year, claimed = gaps, remaining = ledger.remaining(), "gap phase done");

        let used = ledger.used();
        ensure_post!(
            used == bridges + weeks + gaps && used <= self.quota,
            "spent {used} of {} days ({bridges} + {weeks} + {gaps})",
            self.quota
        );
        if used < self.quota {
            // Gap filling stops short of the quota only once the year is full.
            let business_days = holidays.business_days_in_year(year)?;
            ensure_post!(
                used == business_days,
                "{used} of {} days spent with {business_days} business days in {year}",
                self.quota
            );
            info!(
                year,
                quota = self.quota,
                used,
                business_days,
                "year has fewer free weekdays than the quota"
            );
        }
        Ok(OptimizationResult::new(
            year,
            self.quota,
            ledger.into_leave_days(),
            holidays.dropped(),
        ))
    }
}

/// Plan `quota` leave days for `year` from raw holiday records.
///
/// Records with an unparseable date are dropped and counted in
/// [`OptimizationResult::dropped_holidays`]; repeated dates keep their
/// first record.
///
/// # Errors
/// * [`Error::NegativeQuota`] if `quota < 0`.
/// * [`Error::InvalidYear`] if `year` is outside the supported range.
///
/// # Example
/// ```
/// use pont_optimizer::{optimize, LeaveReason};
/// use pont_time::{Date, HolidayRecord};
///
/// // Thursday 1 May 2025 → Friday 2 May is a bridge.
/// let holidays = [HolidayRecord::new("2025-05-01", "Fête du Travail")];
/// let plan = optimize(2025, &holidays, 1).unwrap();
/// assert_eq!(plan.used_count(), 1);
/// assert_eq!(
///     plan.reason_for(Date::from_ymd(2025, 5, 2).unwrap()),
///     Some(LeaveReason::Bridge)
/// );
/// ```
pub fn optimize(year: i64, holidays: &[HolidayRecord], quota: i64) -> Result<OptimizationResult> {
    let optimizer = LeaveOptimizer::with_quota(quota)?;
    let year = Date::check_year(year)?;
    let index = HolidayIndex::from_records(format!("holidays {year}"), holidays);
    optimizer.optimize(year, &index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeaveReason;

    #[test]
    fn negative_quota_fails_fast() {
        assert_eq!(optimize(2025, &[], -1).unwrap_err(), Error::NegativeQuota(-1));
    }

    #[test]
    fn year_out_of_range() {
        assert!(matches!(
            optimize(1850, &[], 5).unwrap_err(),
            Error::InvalidYear { year: 1850, .. }
        ));
        assert!(matches!(
            LeaveOptimizer::new(5).optimize(2200, &HolidayIndex::new("x")),
            Err(Error::InvalidYear { .. })
        ));
    }

    #[test]
    fn phases_run_in_order() {
        // 2024 starts on a Monday; Thursday 15 August is bridged.
        let holidays = [HolidayRecord::new("2024-08-15", "Assomption")];
        let plan = optimize(2024, &holidays, 8).unwrap();
        assert_eq!(plan.count(LeaveReason::Bridge), 1);
        assert_eq!(plan.count(LeaveReason::WeekFill), 5);
        assert_eq!(plan.count(LeaveReason::Gap), 2);
        assert_eq!(plan.reason_for(Date::from_ymd(2024, 8, 16).unwrap()), Some(LeaveReason::Bridge));
        // The week scan starts on 1 January.
        let week: Vec<Date> = plan.days_for(LeaveReason::WeekFill).collect();
        assert_eq!(week[0], Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(week[4], Date::from_ymd(2024, 1, 5).unwrap());
        // Gaps take the earliest remaining weekdays.
        let gaps: Vec<Date> = plan.days_for(LeaveReason::Gap).collect();
        assert_eq!(gaps, vec![Date::from_ymd(2024, 1, 8).unwrap(), Date::from_ymd(2024, 1, 9).unwrap()]);
    }

    #[test]
    fn short_year_spends_every_business_day() {
        let index = HolidayIndex::from_records(
            "two",
            &[HolidayRecord::new("2025-05-01", "a"), HolidayRecord::new("2025-12-25", "b")],
        );
        let plan = LeaveOptimizer::new(400).optimize(2025, &index).unwrap();
        assert_eq!(plan.used_count(), index.business_days_in_year(2025).unwrap());
        assert_eq!(plan.used_count(), 259);
    }

    #[test]
    fn dropped_records_are_reported() {
        let holidays = [
            HolidayRecord::new("2025-05-01", "ok"),
            HolidayRecord::new("2025-05-01T00:00:00Z", "timestamp"),
        ];
        let plan = optimize(2025, &holidays, 0).unwrap();
        assert_eq!(plan.dropped_holidays(), 1);
        assert!(plan.is_empty());
    }
}
