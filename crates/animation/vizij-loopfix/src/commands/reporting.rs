use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use vizij_loopfix_core::{CurveChange, EditOutcome};

/// Print an edit outcome either as JSON or as a short human summary.
pub(super) fn print_outcome(outcome: &EditOutcome, written: &Path, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(outcome).context("serialize edit outcome")?;
        println!("{text}");
        return Ok(());
    }

    println!("{} {}", "Wrote".green().bold(), written.display());
    for report in &outcome.curves {
        let label = match &report.change {
            CurveChange::Blended { blended_keys } => format!("blended ({blended_keys} keys eased)"),
            CurveChange::Skipped => "skipped".yellow().to_string(),
            CurveChange::Removed => "removed".red().to_string(),
            CurveChange::Clipped { removed } => format!("clipped ({removed} keys)"),
            CurveChange::Unchanged => "unchanged".dimmed().to_string(),
        };
        println!("  {:<40} {}", report.binding.to_string(), label);
    }
    Ok(())
}
