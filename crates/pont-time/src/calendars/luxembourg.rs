//! Luxembourg calendar.

use super::rules::{matches_any, HolidayRule, PublicHolidays};
use crate::calendar::Calendar;
use crate::date::Date;

/// Luxembourg calendar.
///
/// Europe Day (May 9) is a public holiday from 2019 on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Luxembourg;

const RULES: &[HolidayRule] = &[
    HolidayRule::Fixed { month: 1, day: 1, since: None, local_name: "Neijoerschdag", name: "New Year's Day" },
    HolidayRule::Easter { offset: 1, local_name: "Ouschterméindeg", name: "Easter Monday" },
    HolidayRule::Fixed { month: 5, day: 1, since: None, local_name: "Dag vun der Aarbecht", name: "Labour Day" },
    HolidayRule::Fixed { month: 5, day: 9, since: Some(2019), local_name: "Europadag", name: "Europe Day" },
    HolidayRule::Easter { offset: 39, local_name: "Christi Himmelfaart", name: "Ascension Day" },
    HolidayRule::Easter { offset: 50, local_name: "Péngschtméindeg", name: "Whit Monday" },
    HolidayRule::Fixed { month: 6, day: 23, since: None, local_name: "Nationalfeierdag", name: "National Day" },
    HolidayRule::Fixed { month: 8, day: 15, since: None, local_name: "Léiffrawëschdag", name: "Assumption Day" },
    HolidayRule::Fixed { month: 11, day: 1, since: None, local_name: "Allerhellgen", name: "All Saints' Day" },
    HolidayRule::Fixed { month: 12, day: 25, since: None, local_name: "Chrëschtdag", name: "Christmas Day" },
    HolidayRule::Fixed { month: 12, day: 26, since: None, local_name: "Stiefesdag", name: "St. Stephen's Day" },
];

impl Calendar for Luxembourg {
    fn name(&self) -> &str {
        "Luxembourg"
    }

    fn is_holiday(&self, date: Date) -> bool {
        matches_any(RULES, date)
    }
}

impl PublicHolidays for Luxembourg {
    fn country_code(&self) -> &'static str {
        "LU"
    }

    fn rules(&self) -> &'static [HolidayRule] {
        RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn europe_day_from_2019() {
        assert!(!Luxembourg.is_holiday(Date::from_ymd(2018, 5, 9).unwrap()));
        assert!(Luxembourg.is_holiday(Date::from_ymd(2019, 5, 9).unwrap()));
        assert_eq!(Luxembourg.holidays(2018).unwrap().len(), 10);
        assert_eq!(Luxembourg.holidays(2025).unwrap().len(), 11);
    }
}
