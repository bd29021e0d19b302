mod ages_cmd;
mod cli;
mod config;
mod drift_cmd;
mod logging;
mod svg;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use planetary_age::CalendarDate;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = match cli.today {
        Some(today) => today,
        None => local_today()?,
    };
    debug!(%today, "reference date");

    match cli.command {
        Command::Ages(args) => ages_cmd::run(&args, today),
        Command::Drift(args) => drift_cmd::run(&args, today),
    }
}

fn local_today() -> Result<CalendarDate> {
    let now = chrono::Local::now().date_naive();
    #[allow(clippy::cast_possible_truncation)]
    let (month, day) = (now.month() as u8, now.day() as u8);
    CalendarDate::new(now.year(), month, day).context("local clock gave an invalid date")
}
