use std::path::PathBuf;

use clap::{Parser, Subcommand};
use planetary_age::{CalendarDate, DEFAULT_DAYS_AHEAD, DEFAULT_ENTRIES, GREGORIAN_YEAR_DAYS};

/// Ages, birthdays and half-birthdays on every world of the solar system.
#[derive(Parser)]
#[command(
    name = "planetary-age",
    version,
    about = "Planetary ages, anniversaries and leap-year drift"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reference date (MM/DD/YYYY). Defaults to today's local date.
    #[arg(long, global = true)]
    pub today: Option<CalendarDate>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print age, next birthday and half-birthday for each body.
    Ages(AgesArgs),
    /// Sweep past birth years to show leap-year drift of the next birthday.
    Drift(DriftArgs),
}

/// Arguments for the `ages` subcommand.
#[derive(clap::Args)]
pub struct AgesArgs {
    /// Birth date (MM/DD/YYYY or YYYY-MM-DD).
    pub birthday: CalendarDate,

    /// Path to a TOML file with extra bodies.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the table as JSON instead.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `drift` subcommand.
#[derive(clap::Args)]
pub struct DriftArgs {
    /// Number of past birth years to sweep.
    #[arg(short, long, default_value_t = DEFAULT_ENTRIES)]
    pub entries: u32,

    /// Days from today to the birthday under test.
    #[arg(short, long = "days-ahead", default_value_t = DEFAULT_DAYS_AHEAD)]
    pub days_ahead: u32,

    /// Year length in Earth days.
    #[arg(long = "year-length", default_value_t = GREGORIAN_YEAR_DAYS)]
    pub year_length: f64,

    /// Write an SVG plot of the sweep to this path.
    #[arg(long)]
    pub svg: Option<PathBuf>,
}
