//! France calendar.

use super::rules::{matches_any, HolidayRule, PublicHolidays};
use crate::calendar::Calendar;
use crate::date::Date;

/// France calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Easter Monday
/// * Labour Day (May 1)
/// * Victory Day (May 8)
/// * Ascension Thursday
/// * Whit Monday
/// * Bastille Day (Jul 14)
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Armistice Day (Nov 11)
/// * Christmas Day (Dec 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct France;

const RULES: &[HolidayRule] = &[
    HolidayRule::Fixed { month: 1, day: 1, since: None, local_name: "Jour de l'an", name: "New Year's Day" },
    HolidayRule::Easter { offset: 1, local_name: "Lundi de Pâques", name: "Easter Monday" },
    HolidayRule::Fixed { month: 5, day: 1, since: None, local_name: "Fête du Travail", name: "Labour Day" },
    HolidayRule::Fixed { month: 5, day: 8, since: None, local_name: "Victoire 1945", name: "Victory in Europe Day" },
    HolidayRule::Easter { offset: 39, local_name: "Ascension", name: "Ascension Day" },
    HolidayRule::Easter { offset: 50, local_name: "Lundi de Pentecôte", name: "Whit Monday" },
    HolidayRule::Fixed { month: 7, day: 14, since: None, local_name: "Fête nationale", name: "Bastille Day" },
    HolidayRule::Fixed { month: 8, day: 15, since: None, local_name: "Assomption", name: "Assumption Day" },
    HolidayRule::Fixed { month: 11, day: 1, since: None, local_name: "Toussaint", name: "All Saints' Day" },
    HolidayRule::Fixed { month: 11, day: 11, since: None, local_name: "Armistice 1918", name: "Armistice Day" },
    HolidayRule::Fixed { month: 12, day: 25, since: None, local_name: "Noël", name: "Christmas Day" },
];

impl Calendar for France {
    fn name(&self) -> &str {
        "France"
    }

    fn is_holiday(&self, date: Date) -> bool {
        matches_any(RULES, date)
    }
}

impl PublicHolidays for France {
    fn country_code(&self) -> &'static str {
        "FR"
    }

    fn rules(&self) -> &'static [HolidayRule] {
        RULES
    }
}
