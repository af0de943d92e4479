//! Switzerland calendar.

use super::rules::{matches_any, HolidayRule, PublicHolidays};
use crate::calendar::Calendar;
use crate::date::Date;

/// Switzerland calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Berchtoldstag (Jan 2)
/// * Good Friday
/// * Easter Monday
/// * Ascension Thursday
/// * Whit Monday
/// * Swiss National Day (Aug 1)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Switzerland;

const RULES: &[HolidayRule] = &[
    HolidayRule::Fixed { month: 1, day: 1, since: None, local_name: "Neujahr", name: "New Year's Day" },
    HolidayRule::Fixed { month: 1, day: 2, since: None, local_name: "Berchtoldstag", name: "St. Berchtold's Day" },
    HolidayRule::Easter { offset: -2, local_name: "Karfreitag", name: "Good Friday" },
    HolidayRule::Easter { offset: 1, local_name: "Ostermontag", name: "Easter Monday" },
    HolidayRule::Easter { offset: 39, local_name: "Auffahrt", name: "Ascension Day" },
    HolidayRule::Easter { offset: 50, local_name: "Pfingstmontag", name: "Whit Monday" },
    HolidayRule::Fixed { month: 8, day: 1, since: None, local_name: "Bundesfeier", name: "Swiss National Day" },
    HolidayRule::Fixed { month: 12, day: 25, since: None, local_name: "Weihnachten", name: "Christmas Day" },
    HolidayRule::Fixed { month: 12, day: 26, since: None, local_name: "Stephanstag", name: "St. Stephen's Day" },
];

impl Calendar for Switzerland {
    fn name(&self) -> &str {
        "Switzerland"
    }

    fn is_holiday(&self, date: Date) -> bool {
        matches_any(RULES, date)
    }
}

impl PublicHolidays for Switzerland {
    fn country_code(&self) -> &'static str {
        "CH"
    }

    fn rules(&self) -> &'static [HolidayRule] {
        RULES
    }
}
