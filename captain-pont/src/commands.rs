//! Subcommand handlers.

use anyhow::{Context, Result};
use pont_optimizer::{LeaveOptimizer, OptimizationResult};
use pont_time::{Date, HolidayIndex, Month, MonthMatrix};
use tracing::{info, info_span};

use crate::cli::{HolidaysArgs, MonthArgs, OptimizeArgs};
use crate::config::PontConfig;
use crate::{report, source};

/// Plan leave and print it.
pub fn optimize(args: OptimizeArgs) -> Result<()> {
    let _cmd = info_span!("optimize").entered();
    let mut config = PontConfig::resolve(&args.source)?;
    if let Some(quota) = args.quota {
        config.quota = quota;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    let (index, result) = plan(&config)?;
    print!("{}", report::plan(&result, &index, config.format)?);
    Ok(())
}

/// List the holidays of the planning year, or of one of its months.
pub fn holidays(args: HolidaysArgs) -> Result<()> {
    let _cmd = info_span!("holidays").entered();
    let mut config = PontConfig::resolve(&args.source)?;
    if let Some(format) = args.format {
        config.format = format;
    }

    let month = args.month.map(Month::try_from_number).transpose()?;
    let year = Date::check_year(config.year())?;
    let index = source::load(&config, year)?;
    print!("{}", report::holidays(&index, year, month, config.format)?);
    Ok(())
}

/// Print one month of the plan as a JSON grid.
pub fn month(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let mut config = PontConfig::resolve(&args.source)?;
    if let Some(quota) = args.quota {
        config.quota = quota;
    }

    let (index, result) = plan(&config)?;
    let month = Month::try_from_number(args.month)?;
    let matrix = MonthMatrix::new(result.year(), month)?;
    println!("{}", report::MonthView::new(&matrix, &index, &result).to_json()?);
    Ok(())
}

fn plan(config: &PontConfig) -> Result<(HolidayIndex, OptimizationResult)> {
    let optimizer = LeaveOptimizer::with_quota(config.quota)?;
    let year = Date::check_year(config.year())?;
    let index = source::load(config, year)?;
    let result = optimizer
        .optimize(year, &index)
        .with_context(|| format!("failed to plan {year}"))?;
    info!(
        year,
        used = result.used_count(),
        remaining = result.remaining_quota(),
        "plan ready"
    );
    Ok((index, result))
}
