//! Belgium calendar.

use super::rules::{matches_any, HolidayRule, PublicHolidays};
use crate::calendar::Calendar;
use crate::date::Date;

/// Belgium calendar (the ten statutory public holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct Belgium;

const RULES: &[HolidayRule] = &[
    HolidayRule::Fixed { month: 1, day: 1, since: None, local_name: "Nouvel An", name: "New Year's Day" },
    HolidayRule::Easter { offset: 1, local_name: "Lundi de Pâques", name: "Easter Monday" },
    HolidayRule::Fixed { month: 5, day: 1, since: None, local_name: "Fête du Travail", name: "Labour Day" },
    HolidayRule::Easter { offset: 39, local_name: "Ascension", name: "Ascension Day" },
    HolidayRule::Easter { offset: 50, local_name: "Lundi de Pentecôte", name: "Whit Monday" },
    HolidayRule::Fixed { month: 7, day: 21, since: None, local_name: "Fête nationale", name: "Belgian National Day" },
    HolidayRule::Fixed { month: 8, day: 15, since: None, local_name: "Assomption", name: "Assumption Day" },
    HolidayRule::Fixed { month: 11, day: 1, since: None, local_name: "Toussaint", name: "All Saints' Day" },
    HolidayRule::Fixed { month: 11, day: 11, since: None, local_name: "Armistice", name: "Armistice Day" },
    HolidayRule::Fixed { month: 12, day: 25, since: None, local_name: "Noël", name: "Christmas Day" },
];

impl Calendar for Belgium {
    fn name(&self) -> &str {
        "Belgium"
    }

    fn is_holiday(&self, date: Date) -> bool {
        matches_any(RULES, date)
    }
}

impl PublicHolidays for Belgium {
    fn country_code(&self) -> &'static str {
        "BE"
    }

    fn rules(&self) -> &'static [HolidayRule] {
        RULES
    }
}
