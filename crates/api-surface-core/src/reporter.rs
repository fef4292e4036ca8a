//! Report sink and accumulation.
//!
//! The engines push findings through the [`Reporter`] trait; the bundled
//! [`CollectingReporter`] resolves severity via [`IssueConfiguration`] and
//! accumulates [`Report`]s for rendering. Baseline handling and other
//! policy layers live behind the same trait, outside this crate.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::issue::{Issue, Severity};
use crate::model::ItemHandle;

/// Sink for lint findings.
pub trait Reporter {
    /// Reports one finding against an item. The message arrives fully
    /// formatted with concrete names and types.
    fn report(&mut self, issue: Issue, item: ItemHandle<'_>, message: &str);
}

/// One accumulated finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Issue id.
    pub issue: Issue,
    /// Issue code (e.g. `AS006`).
    pub code: String,
    /// Resolved severity.
    pub severity: Severity,
    /// Description of the offending item (e.g. `method pkg.Foo.getX()`).
    pub item: String,
    /// Qualified name of the offending item.
    pub qualified_name: String,
    /// Human-readable message.
    pub message: String,
}

impl Report {
    /// Formats the report for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{}: {} [{}] {}: {}",
            self.severity,
            self.code,
            self.issue.name(),
            self.item,
            self.message
        )
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

/// Converts a [`Report`] into a miette [`Diagnostic`] for rich display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("[{code}] {message}")]
pub struct ReportDiagnostic {
    code: String,
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Report> for ReportDiagnostic {
    fn from(r: &Report) -> Self {
        Self {
            code: r.code.clone(),
            message: format!("{}: {}", r.item, r.message),
            help: Some(format!("issue: {}", r.issue.name())),
        }
    }
}

/// Per-issue severity resolution: defaults from the catalog plus overrides.
#[derive(Debug, Clone, Default)]
pub struct IssueConfiguration {
    overrides: HashMap<Issue, Severity>,
}

impl IssueConfiguration {
    /// Creates a configuration with catalog defaults only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the severity of one issue.
    pub fn set_severity(&mut self, issue: Issue, severity: Severity) {
        self.overrides.insert(issue, severity);
    }

    /// Resolves the severity of an issue.
    #[must_use]
    pub fn severity(&self, issue: Issue) -> Severity {
        self.overrides
            .get(&issue)
            .copied()
            .unwrap_or_else(|| issue.default_severity())
    }
}

/// A [`Reporter`] that resolves severities and accumulates reports.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    configuration: IssueConfiguration,
    reports: Vec<Report>,
}

impl CollectingReporter {
    /// Creates a reporter with catalog-default severities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter with the given severity configuration.
    #[must_use]
    pub fn with_configuration(configuration: IssueConfiguration) -> Self {
        Self {
            configuration,
            reports: Vec::new(),
        }
    }

    /// The accumulated reports, in report order.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Consumes the reporter, yielding the reports.
    #[must_use]
    pub fn into_reports(self) -> Vec<Report> {
        self.reports
    }

    /// Whether any report is at error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_reports_at(Severity::Error)
    }

    /// Whether any report meets or exceeds the given severity.
    #[must_use]
    pub fn has_reports_at(&self, severity: Severity) -> bool {
        self.reports.iter().any(|r| r.severity >= severity)
    }

    /// Counts reports by severity: (errors, warnings, lints).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s: Severity| self.reports.iter().filter(|r| r.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Lint),
        )
    }

    /// Formats all reports plus a summary line.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;
        let mut out = String::new();
        for report in &self.reports {
            let _ = writeln!(out, "{report}");
        }
        let (errors, warnings, lints) = self.count_by_severity();
        let _ = writeln!(
            out,
            "\nFound {errors} error(s), {warnings} warning(s), {lints} lint(s)"
        );
        out
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, issue: Issue, item: ItemHandle<'_>, message: &str) {
        let severity = self.configuration.severity(issue);
        if severity == Severity::Hidden {
            return;
        }
        self.reports.push(Report {
            issue,
            code: issue.code().to_string(),
            severity,
            item: item.describe(),
            qualified_name: item.qualified_name().to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodebaseBuilder, TypeItem};

    #[test]
    fn severity_override_applies() {
        let mut config = IssueConfiguration::new();
        config.set_severity(Issue::AcronymName, Severity::Error);
        assert_eq!(config.severity(Issue::AcronymName), Severity::Error);
        assert_eq!(
            config.severity(Issue::OverlappingConstants),
            Issue::OverlappingConstants.default_severity()
        );
    }

    #[test]
    fn hidden_severity_suppresses_report() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("pkg");
        let cls = cb.class(pkg, "Foo");
        let m = cb.method(cls, "getHTMLText", TypeItem::new("java.lang.String"));
        let codebase = cb.build();

        let mut config = IssueConfiguration::new();
        config.set_severity(Issue::AcronymName, Severity::Hidden);
        let mut reporter = CollectingReporter::with_configuration(config);
        reporter.report(Issue::AcronymName, codebase.handle(m), "acronym");
        assert!(reporter.reports().is_empty());
    }

    #[test]
    fn format_includes_code_and_item() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("pkg");
        let cls = cb.class(pkg, "Foo");
        let codebase = cb.build();

        let mut reporter = CollectingReporter::new();
        reporter.report(Issue::EnumClass, codebase.handle(cls), "avoid enums");
        let text = reporter.format_report();
        assert!(text.contains("AS032"));
        assert!(text.contains("class pkg.Foo"));
        assert!(text.contains("1 error(s)"));
    }
}
