use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Captain Pont paid-leave planner.
#[derive(Parser)]
#[command(
    name = "captain-pont",
    version,
    about = "Spend a yearly leave quota on bridges and long weekends"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Plan leave days for a year.
    Optimize(OptimizeArgs),
    /// List the public holidays of a year.
    Holidays(HolidaysArgs),
    /// Show one month as a week-by-week grid of holidays and leave.
    Month(MonthArgs),
}

/// Options shared by every subcommand: where settings and holidays come from.
#[derive(clap::Args, Debug, Default)]
pub struct SourceArgs {
    /// Path to TOML configuration file [default: captain-pont.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the planning year.
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Override the built-in country calendar (FR, BE, CH, LU, DE).
    #[arg(long)]
    pub country: Option<String>,

    /// Read holidays from a JSON feed file instead of a built-in calendar.
    #[arg(long)]
    pub holidays: Option<PathBuf>,
}

/// Arguments for the `optimize` subcommand.
#[derive(clap::Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override the leave quota.
    #[arg(short, long, allow_negative_numbers = true)]
    pub quota: Option<i64>,

    /// Override the output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args, Debug)]
pub struct HolidaysArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only list the holidays of this month (1-12).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Override the output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args, Debug)]
pub struct MonthArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Month to lay out (1-12).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: u8,

    /// Override the leave quota used to mark leave days.
    #[arg(short, long, allow_negative_numbers = true)]
    pub quota: Option<i64>,
}
