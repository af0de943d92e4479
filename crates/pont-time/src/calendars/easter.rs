//! Easter Sunday, the anchor of the movable Christian holidays.

use crate::date::Date;
use pont_core::errors::Result;
use pont_core::Year;

/// Easter Sunday of `year` in the Gregorian calendar.
///
/// Uses Oudin's algorithm.
pub fn easter_sunday(year: Year) -> Result<Date> {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easter_dates() {
        for (y, m, d) in [
            (2000, 4, 23),
            (2008, 3, 23),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ] {
            assert_eq!(easter_sunday(y).unwrap(), Date::from_ymd(y, m, d).unwrap(), "{y}");
        }
    }

    #[test]
    fn always_a_sunday() {
        for y in 1901..=2199u16 {
            assert_eq!(easter_sunday(y).unwrap().weekday(), crate::Weekday::Sunday, "{y}");
        }
    }
}
