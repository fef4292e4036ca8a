//! Shared output formatting for lint reports.

use anyhow::Result;
use api_surface_core::{CollectingReporter, Severity};

use crate::OutputFormat;

/// Prints accumulated reports in the requested format.
pub fn print(reporter: &CollectingReporter, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(reporter),
        OutputFormat::Json => return print_json(reporter),
        OutputFormat::Compact => print_compact(reporter),
    }
    Ok(())
}

fn print_text(reporter: &CollectingReporter) {
    for report in reporter.reports() {
        let severity = match report.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Lint => "\x1b[34mlint\x1b[0m",
            // Hidden reports never reach the reporter
            Severity::Hidden => continue,
        };
        println!("{} [{}] {}", report.code, report.issue.name(), report.item);
        println!("  {severity}: {}", report.message);
        println!();
    }

    let (errors, warnings, lints) = reporter.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!("{summary_color}Found {errors} error(s), {warnings} warning(s), {lints} lint(s)\x1b[0m");
}

fn print_json(reporter: &CollectingReporter) -> Result<()> {
    let json = serde_json::to_string_pretty(reporter.reports())?;
    println!("{json}");
    Ok(())
}

fn print_compact(reporter: &CollectingReporter) {
    for report in reporter.reports() {
        println!("{report}");
    }
}
