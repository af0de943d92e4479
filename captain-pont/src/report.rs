//! Text and JSON rendering of plans, holiday lists, and month grids.

use std::fmt;

use anyhow::Result;
use pont_optimizer::{LeaveReason, OptimizationResult};
use pont_time::{Calendar, Date, Holiday, HolidayIndex, Month, MonthMatrix};
use serde::Serialize;

use crate::config::OutputFormat;

// ── Plan ──────────────────────────────────────────────────────────────────────

/// Render a leave plan.
pub fn plan(plan: &OptimizationResult, holidays: &HolidayIndex, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        OutputFormat::Text => Ok(PlanText { plan, holidays }.to_string()),
    }
}

/// Text layout of a plan: header, one line per leave day, then totals.
struct PlanText<'a> {
    plan: &'a OptimizationResult,
    holidays: &'a HolidayIndex,
}

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(
            f,
            "Leave plan {} ({}): {} of {} days used, {} left",
            plan.year(),
            self.holidays.name(),
            plan.used_count(),
            plan.quota(),
            plan.remaining_quota()
        )?;
        for day in plan.leave_days() {
            write!(f, "  {} {}  {:<8}", day.date, day.date.weekday().short_name(), day.reason)?;
            if day.reason == LeaveReason::Bridge {
                if let Some(h) = bridged_holiday(day.date, self.holidays) {
                    write!(f, "  {} {}", h.date.weekday().short_name(), h.local_name)?;
                }
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Bridges: {}  Week days: {}  Gaps: {}",
            plan.count(LeaveReason::Bridge),
            plan.count(LeaveReason::WeekFill),
            plan.count(LeaveReason::Gap)
        )?;
        if plan.dropped_holidays() > 0 {
            writeln!(f, "Ignored {} malformed holiday entries", plan.dropped_holidays())?;
        }
        Ok(())
    }
}

/// The holiday a bridge day connects to the weekend.
fn bridged_holiday(bridge: Date, holidays: &HolidayIndex) -> Option<&Holiday> {
    [1, -1]
        .into_iter()
        .filter_map(|n| bridge.add_days(n).ok())
        .find_map(|d| holidays.holiday_for(d))
}

// ── Holidays ──────────────────────────────────────────────────────────────────

/// Render the holidays falling in `year` (or only in `month` of it), in
/// date order.
pub fn holidays(index: &HolidayIndex, year: u16, month: Option<Month>, format: OutputFormat) -> Result<String> {
    let list = match month {
        Some(month) => index.in_month(year, month),
        None => {
            let mut list: Vec<&Holiday> = index.in_year(year).collect();
            list.sort_by_key(|h| h.date);
            list
        }
    };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&list)?),
        OutputFormat::Text => Ok(HolidayList(list).to_string()),
    }
}

/// One line per holiday; the English name follows when it differs.
struct HolidayList<'a>(Vec<&'a Holiday>);

impl fmt::Display for HolidayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for h in &self.0 {
            write!(f, "{} {}  {}", h.date, h.date.weekday().short_name(), h.local_name)?;
            if let Some(name) = h.name.as_deref().filter(|n| *n != h.local_name) {
                write!(f, " ({name})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── Month grid ────────────────────────────────────────────────────────────────

/// A month grid with holidays and leave marked, as handed to a renderer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView<'a> {
    year: u16,
    month: u8,
    month_name: &'static str,
    weeks: Vec<[Option<DayCell<'a>>; 7]>,
}

/// One day of a [`MonthView`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<'a> {
    date: Date,
    weekday: &'static str,
    weekend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    holiday: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    leave: Option<LeaveReason>,
}

impl<'a> MonthView<'a> {
    /// Mark `matrix` with `holidays` and the leave days of `plan`.
    pub fn new(matrix: &MonthMatrix, holidays: &'a HolidayIndex, plan: &OptimizationResult) -> Self {
        let weeks = matrix
            .weeks()
            .iter()
            .map(|&week| {
                week.map(|cell| {
                    cell.map(|date| DayCell {
                        date,
                        weekday: date.weekday().short_name(),
                        weekend: date.is_weekend(),
                        holiday: holidays.holiday_for(date).map(|h| h.local_name.as_str()),
                        leave: plan.reason_for(date),
                    })
                })
            })
            .collect();
        Self {
            year: matrix.year(),
            month: matrix.month().number(),
            month_name: matrix.month().long_name(),
            weeks,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
