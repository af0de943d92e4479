//! Optimization output.

use crate::leave::{LeaveDay, LeaveReason};
use pont_core::{Size, Year};
use pont_time::Date;
use serde::Serialize;

/// The leave plan for one year.
///
/// Leave days are sorted by date and pairwise distinct;
/// `used_count + remaining_quota == quota` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    year: Year,
    quota: Size,
    used_count: Size,
    remaining_quota: Size,
    dropped_holidays: Size,
    leave_days: Vec<LeaveDay>,
}

impl OptimizationResult {
    pub(crate) fn new(year: Year, quota: Size, leave_days: Vec<LeaveDay>, dropped_holidays: Size) -> Self {
        let used_count = leave_days.len();
        Self {
            year,
            quota,
            used_count,
            remaining_quota: quota - used_count,
            dropped_holidays,
            leave_days,
        }
    }

    /// The year planned.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The quota the plan was computed for.
    pub fn quota(&self) -> Size {
        self.quota
    }

    /// Leave days spent.
    pub fn used_count(&self) -> Size {
        self.used_count
    }

    /// Quota left unspent because the year had no more free weekdays.
    pub fn remaining_quota(&self) -> Size {
        self.remaining_quota
    }

    /// Holiday records dropped because their date did not parse.
    pub fn dropped_holidays(&self) -> Size {
        self.dropped_holidays
    }

    /// Leave days in date order.
    pub fn leave_days(&self) -> &[LeaveDay] {
        &self.leave_days
    }

    /// Return `true` if no leave was allocated.
    pub fn is_empty(&self) -> bool {
        self.leave_days.is_empty()
    }

    /// Why `date` was taken off, or `None` if it is not a leave day.
    pub fn reason_for(&self, date: Date) -> Option<LeaveReason> {
        self.leave_days
            .binary_search_by_key(&date, |d| d.date)
            .ok()
            .map(|i| self.leave_days[i].reason)
    }

    /// Number of leave days claimed for `reason`.
    pub fn count(&self, reason: LeaveReason) -> Size {
        self.leave_days.iter().filter(|d| d.reason == reason).count()
    }

    /// Leave days claimed for `reason`, in date order.
    pub fn days_for(&self, reason: LeaveReason) -> impl Iterator<Item = Date> + '_ {
        self.leave_days
            .iter()
            .filter(move |d| d.reason == reason)
            .map(|d| d.date)
    }
}
