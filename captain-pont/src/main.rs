mod cli;
mod commands;
mod config;
mod logging;
mod report;
mod source;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Optimize(args) => commands::optimize(args),
        Command::Holidays(args) => commands::holidays(args),
        Command::Month(args) => commands::month(args),
    }
}
