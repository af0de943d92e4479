//! Rule-based public-holiday calendars.
//!
//! These cover the countries the planner offers out of the box and let it
//! run without a holiday feed.  Each calendar implements both [`Calendar`]
//! and [`PublicHolidays`].
//!
//! [`Calendar`]: crate::calendar::Calendar

/// Belgium.
pub mod belgium;
/// Easter Sunday computation.
pub mod easter;
/// France.
pub mod france;
/// Germany (nationwide holidays).
pub mod germany;
/// Luxembourg.
pub mod luxembourg;
/// Rule types shared by the country calendars.
pub mod rules;
/// Switzerland.
pub mod switzerland;

pub use belgium::Belgium;
pub use france::France;
pub use germany::Germany;
pub use luxembourg::Luxembourg;
pub use rules::{HolidayRule, PublicHolidays};
pub use switzerland::Switzerland;

use pont_core::errors::{Error, Result};

/// Country codes with a built-in calendar, in menu order.
pub const SUPPORTED_COUNTRIES: &[&str] = &["FR", "BE", "CH", "LU", "DE"];

/// Look up the built-in calendar for an ISO 3166-1 alpha-2 code
/// (case-insensitive).
pub fn by_country_code(code: &str) -> Option<Box<dyn PublicHolidays>> {
    match code.to_ascii_uppercase().as_str() {
        "FR" => Some(Box::new(France)),
        "BE" => Some(Box::new(Belgium)),
        "CH" => Some(Box::new(Switzerland)),
        "LU" => Some(Box::new(Luxembourg)),
        "DE" => Some(Box::new(Germany)),
        _ => None,
    }
}

/// Like [`by_country_code`], but an unknown code is an
/// [`Error::InvalidArgument`] naming the supported ones.
pub fn for_country(code: &str) -> Result<Box<dyn PublicHolidays>> {
    by_country_code(code).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "no built-in calendar for country '{code}' (supported: {})",
            SUPPORTED_COUNTRIES.join(", ")
        ))
    })
}
