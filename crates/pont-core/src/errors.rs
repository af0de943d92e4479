//! Error types for captain-pont.
//!
//! Library crates return a single `thiserror`-derived enum.  Precondition
//! and postcondition checks go through the [`ensure!`](crate::ensure) and
//! [`ensure_post!`](crate::ensure_post) macros.

use thiserror::Error;

/// The top-level error type used throughout captain-pont.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date could not be built or parsed: out-of-range month or day,
    /// malformed ISO-8601 text, or arithmetic leaving the supported range.
    #[error("invalid date: {0}")]
    Date(String),

    /// The requested planning year lies outside the supported date range.
    #[error("year {year} out of range [{min}, {max}]")]
    InvalidYear {
        /// The year that was requested.
        year: i64,
        /// Smallest supported year.
        min: u16,
        /// Largest supported year.
        max: u16,
    },

    /// A negative leave quota was supplied by the caller.
    #[error("leave quota must be non-negative, got {0}")]
    NegativeQuota(i64),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Invalid argument, e.g. an unknown country code.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout captain-pont.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pont_core::{ensure, errors::Error};
/// fn month(m: u8) -> pont_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pont_core::{ensure_post, errors::Error};
/// fn spend(quota: usize, used: usize) -> pont_core::errors::Result<usize> {
///     ensure_post!(used <= quota, "spent {used} of {quota}");
///     Ok(quota - used)
/// }
/// assert_eq!(spend(25, 20), Ok(5));
/// assert!(spend(25, 26).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
