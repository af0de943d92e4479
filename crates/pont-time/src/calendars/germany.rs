//! Germany calendar (nationwide public holidays).

use super::rules::{matches_any, HolidayRule, PublicHolidays};
use crate::calendar::Calendar;
use crate::date::Date;

/// Germany calendar.
///
/// Only the holidays observed in every federal state are included; regional
/// holidays such as Epiphany or Corpus Christi are not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

const RULES: &[HolidayRule] = &[
    HolidayRule::Fixed { month: 1, day: 1, since: None, local_name: "Neujahr", name: "New Year's Day" },
    HolidayRule::Easter { offset: -2, local_name: "Karfreitag", name: "Good Friday" },
    HolidayRule::Easter { offset: 1, local_name: "Ostermontag", name: "Easter Monday" },
    HolidayRule::Fixed { month: 5, day: 1, since: None, local_name: "Tag der Arbeit", name: "Labour Day" },
    HolidayRule::Easter { offset: 39, local_name: "Christi Himmelfahrt", name: "Ascension Day" },
    HolidayRule::Easter { offset: 50, local_name: "Pfingstmontag", name: "Whit Monday" },
    HolidayRule::Fixed { month: 10, day: 3, since: Some(1990), local_name: "Tag der Deutschen Einheit", name: "German Unity Day" },
    HolidayRule::Fixed { month: 12, day: 25, since: None, local_name: "Erster Weihnachtstag", name: "Christmas Day" },
    HolidayRule::Fixed { month: 12, day: 26, since: None, local_name: "Zweiter Weihnachtstag", name: "St. Stephen's Day" },
];

impl Calendar for Germany {
    fn name(&self) -> &str {
        "Germany"
    }

    fn is_holiday(&self, date: Date) -> bool {
        matches_any(RULES, date)
    }
}

impl PublicHolidays for Germany {
    fn country_code(&self) -> &'static str {
        "DE"
    }

    fn rules(&self) -> &'static [HolidayRule] {
        RULES
    }
}
