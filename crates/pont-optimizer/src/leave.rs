//! Leave days and the reason each one was chosen.

use pont_time::Date;
use serde::{Deserialize, Serialize};

/// Which allocation phase claimed a leave day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeaveReason {
    /// A Monday before a Tuesday holiday or a Friday after a Thursday one.
    Bridge,
    /// One day of a fully free Monday–Friday week.
    WeekFill,
    /// Leftover quota spent on the earliest free weekday.
    Gap,
}

impl LeaveReason {
    /// All reasons, in phase order.
    pub const ALL: [LeaveReason; 3] = [LeaveReason::Bridge, LeaveReason::WeekFill, LeaveReason::Gap];
}

impl std::fmt::Display for LeaveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LeaveReason::Bridge => "Bridge",
            LeaveReason::WeekFill => "WeekFill",
            LeaveReason::Gap => "Gap",
        };
        f.pad(name)
    }
}

/// A day of paid leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeaveDay {
    /// The day taken off.
    pub date: Date,
    /// Why it was chosen.
    pub reason: LeaveReason,
}
