use std::fs;

use anyhow::{Context, Result};
use planetary_age::{sweep, CalendarDate, DriftSummary, YearLength};
use tracing::info;

use crate::cli::DriftArgs;
use crate::svg;

/// Run the leap-year drift sweep and print its summary.
pub fn run(args: &DriftArgs, today: CalendarDate) -> Result<()> {
    let year_length = YearLength::new(args.year_length)?;
    let summary = sweep(today, i64::from(args.days_ahead), args.entries, year_length)
        .context("drift sweep failed")?;

    print!("{}", render_summary(&summary));

    if let Some(path) = &args.svg {
        fs::write(path, svg::render(&summary))
            .with_context(|| format!("failed to write plot: {}", path.display()))?;
        info!(path = %path.display(), "wrote drift plot");
    }
    Ok(())
}

pub fn render_summary(summary: &DriftSummary) -> String {
    let mut out = format!(
        "Birthday {} is {} days away\n",
        summary.birthday, summary.true_value
    );
    match (summary.mean(), summary.max_deviation()) {
        (Some(mean), Some(max)) => out.push_str(&format!(
            "Over {} birth years: mean {mean:.4} days, largest deviation {max:.4} days\n",
            summary.samples.len()
        )),
        _ => out.push_str("No birth years sampled\n"),
    }
    out
}
