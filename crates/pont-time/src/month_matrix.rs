//! Week-major month grid.
//!
//! Lays a month out the way a wall calendar does: one row per week,
//! Sunday in the first column, with empty cells before the 1st and after
//! the last day.  Marking holidays or leave on the grid is left to the
//! caller.

use crate::date::Date;
use crate::month::Month;
use pont_core::errors::Result;
use pont_core::Year;

/// One week of the grid, Sunday first.
pub type Week = [Option<Date>; 7];

/// A month laid out as rows of seven days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMatrix {
    year: Year,
    month: Month,
    weeks: Vec<Week>,
}

impl MonthMatrix {
    /// Build the grid for `month` of `year`.
    pub fn new(year: Year, month: Month) -> Result<Self> {
        let first = month.first_day(year)?;
        let lead = first.weekday().sunday_based() as usize;
        let len = month.days_in(year) as usize;
        let rows = (lead + len).div_ceil(7);

        let mut weeks = vec![[None; 7]; rows];
        for offset in 0..len {
            let cell = lead + offset;
            weeks[cell / 7][cell % 7] = Some(first.add_days(offset as i32)?);
        }
        Ok(Self { year, month, weeks })
    }

    /// The year shown.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The month shown.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Rows of the grid, first week first.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// The dates of the month in order, skipping padding cells.
    pub fn cells(&self) -> impl Iterator<Item = Date> + '_ {
        self.weeks.iter().flat_map(|w| w.iter().flatten().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn may_2025_layout() {
        // 1 May 2025 is a Thursday: four leading blanks, five rows.
        let grid = MonthMatrix::new(2025, Month::May).unwrap();
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.weeks()[0][..4], [None; 4]);
        assert_eq!(grid.weeks()[0][4], Some(Date::from_ymd(2025, 5, 1).unwrap()));
        assert_eq!(grid.weeks()[4][6], Some(Date::from_ymd(2025, 5, 31).unwrap()));
        assert_eq!(grid.cells().count(), 31);
    }

    #[test]
    fn february_starting_on_sunday_fits_four_rows() {
        // 1 February 2015 is a Sunday and 2015 is not a leap year.
        let grid = MonthMatrix::new(2015, Month::February).unwrap();
        assert_eq!(grid.weeks().len(), 4);
        assert!(grid.weeks().iter().all(|w| w.iter().all(Option::is_some)));
    }

    #[test]
    fn six_row_month() {
        // 1 March 2025 is a Saturday: 6 blanks + 31 days = 37 cells.
        let grid = MonthMatrix::new(2025, Month::March).unwrap();
        assert_eq!(grid.weeks().len(), 6);
        assert_eq!(grid.weeks()[5][1], Some(Date::from_ymd(2025, 3, 31).unwrap()));
        assert_eq!(grid.weeks()[5][2], None);
    }

    #[test]
    fn cells_are_in_date_order() {
        let grid = MonthMatrix::new(2024, Month::February).unwrap();
        let days: Vec<u8> = grid.cells().map(|d| d.day_of_month()).collect();
        assert_eq!(days, (1..=29).collect::<Vec<u8>>());
    }
}
