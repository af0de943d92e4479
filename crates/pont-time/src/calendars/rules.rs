//! Holiday rules shared by the country calendars.

use super::easter::easter_sunday;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday::Holiday;
use pont_core::errors::Result;
use pont_core::Year;

/// How a holiday's date is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year, optionally only from a given year on.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of the month.
        day: u8,
        /// First year the holiday is observed.
        since: Option<Year>,
        /// Local name.
        local_name: &'static str,
        /// English name.
        name: &'static str,
    },
    /// A fixed number of days after Easter Sunday (negative for before).
    Easter {
        /// Offset from Easter Sunday in days.
        offset: i32,
        /// Local name.
        local_name: &'static str,
        /// English name.
        name: &'static str,
    },
}

impl HolidayRule {
    /// The date of this holiday in `year`, or `None` if it is not observed
    /// that year.
    pub fn date_in(&self, year: Year) -> Result<Option<Date>> {
        match *self {
            HolidayRule::Fixed { since: Some(first), .. } if year < first => Ok(None),
            HolidayRule::Fixed { month, day, .. } => Date::from_ymd(year, month, day).map(Some),
            HolidayRule::Easter { offset, .. } => easter_sunday(year)?.add_days(offset).map(Some),
        }
    }

    fn names(&self) -> (&'static str, &'static str) {
        match *self {
            HolidayRule::Fixed { local_name, name, .. } | HolidayRule::Easter { local_name, name, .. } => {
                (local_name, name)
            }
        }
    }
}

/// A country calendar whose holidays follow a fixed list of rules.
pub trait PublicHolidays: Calendar {
    /// ISO 3166-1 alpha-2 code (e.g. `"FR"`).
    fn country_code(&self) -> &'static str;

    /// The rules defining this country's public holidays.
    fn rules(&self) -> &'static [HolidayRule];

    /// The holidays of `year`, in date order.
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::with_capacity(self.rules().len());
        for rule in self.rules() {
            if let Some(date) = rule.date_in(year)? {
                let (local_name, name) = rule.names();
                holidays.push(Holiday {
                    date,
                    local_name: local_name.to_string(),
                    name: Some(name.to_string()),
                    country_code: Some(self.country_code().to_string()),
                });
            }
        }
        holidays.sort_by_key(|h| h.date);
        Ok(holidays)
    }
}

/// Return `true` if any rule places a holiday on `date`.
pub(crate) fn matches_any(rules: &[HolidayRule], date: Date) -> bool {
    rules
        .iter()
        .any(|r| matches!(r.date_in(date.year()), Ok(Some(d)) if d == date))
}
