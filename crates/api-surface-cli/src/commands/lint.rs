//! Lint command implementation.

use anyhow::{Context, Result};
use api_surface_core::{
    signature, ApiLint, ApiRuleBox, Codebase, CollectingReporter, Config, Severity,
};
use api_surface_rules::{all_rules, legacy_allowlist};
use std::path::Path;

use crate::OutputFormat;

/// Runs the lint command. Returns whether the run crossed the configured
/// failure threshold.
pub fn run(
    current: &Path,
    previous: Option<&Path>,
    format: OutputFormat,
    rules_filter: Option<String>,
    config_path: Option<&Path>,
) -> Result<bool> {
    let config = match config_path {
        Some(p) => Config::from_file(p)
            .with_context(|| format!("failed to load config: {}", p.display()))?,
        None => Config::default(),
    };

    let codebase = load_codebase(current)?;
    let previous = previous.map(load_codebase).transpose()?;

    let rules = match rules_filter {
        Some(filter) => filter_rules(&filter)?,
        None => all_rules(),
    };

    let issue_configuration = config.issue_configuration();
    let fail_on = config.fail_on.unwrap_or(Severity::Error);
    let lint = ApiLint::builder()
        .rules(rules)
        .config(config)
        .allowlist(legacy_allowlist())
        .build();

    tracing::info!(
        "linting {} with {} rules",
        current.display(),
        lint.rule_count()
    );

    let mut reporter = CollectingReporter::with_configuration(issue_configuration);
    lint.check(&codebase, previous.as_ref(), &mut reporter, None);

    super::output::print(&reporter, format)?;

    Ok(reporter.has_reports_at(fail_on))
}

/// Reads and loads a signature-JSON file.
pub(crate) fn load_codebase(path: &Path) -> Result<Codebase> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let description = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("signature");
    signature::load_str(&content, description)
        .with_context(|| format!("failed to load {}", path.display()))
}

fn filter_rules(filter: &str) -> Result<Vec<ApiRuleBox>> {
    let mut rules = Vec::new();
    for name in filter.split(',').map(str::trim) {
        let rule = all_rules()
            .into_iter()
            .find(|r| r.name() == name)
            .with_context(|| format!("unknown rule `{name}`"))?;
        rules.push(rule);
    }
    Ok(rules)
}
