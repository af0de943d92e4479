//! Public holidays and the date-keyed holiday index.
//!
//! Holidays arrive from an external source (a public-holiday feed or one of
//! the rule-based [`calendars`](crate::calendars)) as an ordered list.  The
//! [`HolidayIndex`] turns that list into an O(1) lookup while keeping the
//! supplied order, which the bridge search relies on.

use std::collections::HashMap;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::month::Month;
use pont_core::errors::Result;
use pont_core::{Size, Year};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A public holiday on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// The day the holiday falls on.
    pub date: Date,
    /// Name in the country's language, as published.
    pub local_name: String,
    /// English name, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 country code, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl Holiday {
    /// Create a holiday with only a local name.
    pub fn new(date: Date, local_name: impl Into<String>) -> Self {
        Self {
            date,
            local_name: local_name.into(),
            name: None,
            country_code: None,
        }
    }
}

/// An unvalidated holiday entry as found in a public-holiday feed.
///
/// The date is kept as text so that a single malformed entry can be dropped
/// without rejecting the whole list.  Unknown feed fields (`fixed`,
/// `global`, `counties`, …) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Name in the country's language.
    pub local_name: String,
    /// English name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl HolidayRecord {
    /// Create a record from a date string and a local name.
    pub fn new(date: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            local_name: local_name.into(),
            name: None,
            country_code: None,
        }
    }

    /// Validate the date and build a [`Holiday`].
    pub fn parse(&self) -> Result<Holiday> {
        Ok(Holiday {
            date: Date::parse_iso(&self.date)?,
            local_name: self.local_name.clone(),
            name: self.name.clone(),
            country_code: self.country_code.clone(),
        })
    }
}

impl From<&Holiday> for HolidayRecord {
    fn from(h: &Holiday) -> Self {
        Self {
            date: h.date.to_string(),
            local_name: h.local_name.clone(),
            name: h.name.clone(),
            country_code: h.country_code.clone(),
        }
    }
}

/// Date-keyed holiday lookup.
///
/// At most one holiday is kept per date: when the input repeats a date the
/// first entry wins and later ones are ignored.  Iteration follows the
/// first-seen order of the input, not date order.
#[derive(Debug, Clone, Default)]
pub struct HolidayIndex {
    name: String,
    holidays: Vec<Holiday>,
    by_date: HashMap<Date, usize>,
    dropped: Size,
}

impl HolidayIndex {
    /// Create an empty index with the given calendar name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build an index from already-validated holidays.
    pub fn from_holidays(name: impl Into<String>, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut index = Self::new(name);
        for holiday in holidays {
            index.insert(holiday);
        }
        index
    }

    /// Build an index from raw feed records.
    ///
    /// Records whose date does not parse are logged, counted in
    /// [`HolidayIndex::dropped`], and skipped.
    pub fn from_records<'a>(
        name: impl Into<String>,
        records: impl IntoIterator<Item = &'a HolidayRecord>,
    ) -> Self {
        let mut index = Self::new(name);
        for record in records {
            match record.parse() {
                Ok(holiday) => {
                    index.insert(holiday);
                }
                Err(e) => {
                    warn!(date = %record.date, name = %record.local_name, error = %e, "dropping holiday record");
                    index.dropped += 1;
                }
            }
        }
        debug!(
            calendar = %index.name,
            holidays = index.len(),
            dropped = index.dropped,
            "holiday index built"
        );
        index
    }

    /// Add a holiday.  Returns `false` (and keeps the existing entry) if a
    /// holiday is already recorded for that date.
    pub fn insert(&mut self, holiday: Holiday) -> bool {
        if self.by_date.contains_key(&holiday.date) {
            return false;
        }
        self.by_date.insert(holiday.date, self.holidays.len());
        self.holidays.push(holiday);
        true
    }

    /// The holiday recorded for `date`, if any.
    pub fn holiday_for(&self, date: Date) -> Option<&Holiday> {
        self.by_date.get(&date).map(|&i| &self.holidays[i])
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> Size {
        self.holidays.len()
    }

    /// Return `true` if the index holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Number of input records rejected by [`HolidayIndex::from_records`].
    pub fn dropped(&self) -> Size {
        self.dropped
    }

    /// Holidays in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    /// Holidays falling in `year`, in first-seen order.
    pub fn in_year(&self, year: Year) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(move |h| h.date.year() == year)
    }

    /// Holidays falling in `month` of `year`, in date order.
    pub fn in_month(&self, year: Year, month: Month) -> Vec<&Holiday> {
        let mut found: Vec<&Holiday> = self
            .in_year(year)
            .filter(|h| Month::of(h.date) == month)
            .collect();
        found.sort_by_key(|h| h.date);
        found
    }
}

impl<'a> IntoIterator for &'a HolidayIndex {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Calendar for HolidayIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.by_date.contains_key(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn lookup_and_name() {
        let index = HolidayIndex::from_holidays(
            "FR",
            [
                Holiday::new(date(2025, 7, 14), "Fête nationale"),
                Holiday::new(date(2025, 8, 15), "Assomption"),
            ],
        );
        assert!(index.is_holiday(date(2025, 7, 14)));
        assert!(!index.is_holiday(date(2025, 7, 15)));
        assert_eq!(
            index.holiday_for(date(2025, 8, 15)).map(|h| h.local_name.as_str()),
            Some("Assomption")
        );
        assert!(index.holiday_for(date(2025, 8, 16)).is_none());
    }

    #[test]
    fn duplicates_keep_first() {
        let mut index = HolidayIndex::new("dup");
        assert!(index.insert(Holiday::new(date(2025, 5, 1), "first")));
        assert!(!index.insert(Holiday::new(date(2025, 5, 1), "second")));
        assert_eq!(index.len(), 1);
        assert_eq!(index.holiday_for(date(2025, 5, 1)).unwrap().local_name, "first");
    }

    #[test]
    fn invalid_records_are_dropped() {
        let records = vec![
            HolidayRecord::new("2025-01-01", "Jour de l'an"),
            HolidayRecord::new("2025-02-30", "bogus"),
            HolidayRecord::new("not a date", "bogus"),
            HolidayRecord::new("2025-12-25", "Noël"),
        ];
        let index = HolidayIndex::from_records("FR", &records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.dropped(), 2);
        let order: Vec<Date> = index.iter().map(|h| h.date).collect();
        assert_eq!(order, vec![date(2025, 1, 1), date(2025, 12, 25)]);
    }

    #[test]
    fn business_days_exclude_holidays() {
        let index = HolidayIndex::from_holidays("one", [Holiday::new(date(2025, 5, 1), "Labour")]);
        assert!(!index.is_business_day(date(2025, 5, 1)));
        assert!(index.is_business_day(date(2025, 5, 2)));
        assert!(!index.is_business_day(date(2025, 5, 3))); // Saturday
    }

    #[test]
    fn month_listing_is_sorted_and_year_bound() {
        let index = HolidayIndex::from_holidays(
            "x",
            [
                Holiday::new(date(2025, 5, 29), "Ascension"),
                Holiday::new(date(2025, 5, 1), "Labour"),
                Holiday::new(date(2026, 5, 1), "Labour"),
            ],
        );
        let may: Vec<Date> = index.in_month(2025, Month::May).iter().map(|h| h.date).collect();
        assert_eq!(may, vec![date(2025, 5, 1), date(2025, 5, 29)]);
        assert_eq!(index.in_year(2026).count(), 1);
    }
}
