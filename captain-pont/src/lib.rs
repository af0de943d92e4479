//! # captain-pont
//!
//! Paid-leave planning around public holidays.
//!
//! This crate is a **façade** that re-exports the workspace crates, and
//! hosts the `captain-pont` command-line tool.  Application code should
//! depend on this crate rather than the individual `pont-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use captain_pont::optimizer::{optimize, LeaveReason};
//! use captain_pont::time::{Date, HolidayRecord};
//!
//! // Ascension Thursday 2025: the Friday after is the best day to take.
//! let holidays = [HolidayRecord::new("2025-05-29", "Ascension")];
//! let plan = optimize(2025, &holidays, 25).unwrap();
//!
//! assert_eq!(plan.used_count(), 25);
//! assert_eq!(
//!     plan.reason_for(Date::from_ymd(2025, 5, 30).unwrap()),
//!     Some(LeaveReason::Bridge)
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias, and primitive aliases.
pub use pont_core as core;

/// Dates, calendars, holidays, and month grids.
pub use pont_time as time;

/// The leave allocation pipeline.
pub use pont_optimizer as optimizer;
