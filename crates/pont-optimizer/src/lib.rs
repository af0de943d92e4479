//! # pont-optimizer
//!
//! Spends a yearly paid-leave quota where it buys the most rest.
//!
//! Allocation runs in three fixed phases over one claimed-day ledger:
//!
//! 1. **Bridges**: the Monday before a Tuesday holiday and the Friday after
//!    a Thursday holiday, in holiday-source order.
//! 2. **Whole weeks**: free Monday–Friday blocks, earliest first, five days
//!    at a time.
//! 3. **Gaps**: any leftover quota on the earliest free weekdays.
//!
//! No day is ever a weekend, a holiday, outside the target year, or claimed
//! twice, and the quota is never exceeded.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Bridge detection.
pub mod bridge;

/// Gap filling.
pub mod gap_fill;

/// `LeaveDay` and `LeaveReason`.
pub mod leave;

/// The claimed-day ledger.
pub mod ledger;

/// The allocation pipeline and its entry points.
pub mod optimizer;

/// `OptimizationResult`.
pub mod result;

/// Whole-week filling.
pub mod week_fill;

pub use leave::{LeaveDay, LeaveReason};
pub use ledger::ClaimLedger;
pub use optimizer::{optimize, LeaveOptimizer, DEFAULT_QUOTA};
pub use result::OptimizationResult;
