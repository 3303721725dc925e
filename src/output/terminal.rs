//! Terminal output utilities.
//!
//! Provides colored rendering of reports and errors for the command line.

use crate::models::SubnetReport;
use colored::Colorize;
use std::fmt::Display;

/// Render `report` as aligned `label value` lines with bold labels.
pub fn format_report(report: &SubnetReport) -> String {
    let width = report.label_width();
    report
        .rows()
        .into_iter()
        .map(|(label, value)| {
            let padded = format!("{label:<width$}");
            format!("{}{}\n", padded.as_str().bold(), value.as_str().green())
        })
        .collect()
}

/// Render an error as `Error: <message>`.
pub fn format_error<E: Display>(e: E) -> String {
    format!("{} {e}", "Error:".red())
}
