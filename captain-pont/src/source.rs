//! Where holidays come from: a public-holiday feed file or a built-in
//! country calendar.

use std::path::Path;

use anyhow::{Context, Result};
use pont_core::Year;
use pont_time::{for_country, HolidayIndex, HolidayRecord};
use tracing::info;

use crate::config::PontConfig;

/// Build the holiday index `config` points at for `year`.
pub fn load(config: &PontConfig, year: Year) -> Result<HolidayIndex> {
    match &config.holidays {
        Some(path) => from_feed(path),
        None => from_country(&config.country, year),
    }
}

/// Read a JSON array of `{date, localName, ...}` records.
///
/// Records with a malformed date are dropped with a warning.
pub fn from_feed(path: &Path) -> Result<HolidayIndex> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read holidays: {}", path.display()))?;
    let records: Vec<HolidayRecord> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse holidays: {}", path.display()))?;
    let index = HolidayIndex::from_records(path.display().to_string(), &records);
    info!(path = %path.display(), holidays = index.len(), dropped = index.dropped(), "loaded holiday feed");
    Ok(index)
}

/// Generate `year`'s holidays from a built-in calendar.
pub fn from_country(code: &str, year: Year) -> Result<HolidayIndex> {
    let calendar = for_country(code)?;
    let holidays = calendar
        .holidays(year)
        .with_context(|| format!("failed to compute {} holidays for {year}", calendar.name()))?;
    info!(country = calendar.country_code(), year, holidays = holidays.len(), "built-in calendar");
    Ok(HolidayIndex::from_holidays(calendar.name(), holidays))
}
