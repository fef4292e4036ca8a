//! Configuration types for api-surface.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::issue::{Issue, Severity};
use crate::reporter::IssueConfiguration;

/// Top-level configuration, loaded from `api-surface.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for run failure (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Minimum SDK level of the linted surface; gates SDK-dependent type
    /// recommendations such as the ICU preference.
    #[serde(default)]
    pub min_sdk: u32,

    /// Package-name prefixes whose subtrees are never linted.
    #[serde(default)]
    pub ignored_packages: Vec<String>,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Per-issue severity overrides, keyed by issue name.
    #[serde(default)]
    pub issues: HashMap<String, Severity>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or names an unknown issue.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        for name in config.issues.keys() {
            if Issue::from_name(name).is_none() {
                return Err(ConfigError::UnknownIssue { name: name.clone() });
            }
        }
        Ok(config)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Whether a package falls under an ignored prefix.
    #[must_use]
    pub fn is_package_ignored(&self, package_name: &str) -> bool {
        self.ignored_packages
            .iter()
            .any(|prefix| package_name.starts_with(prefix.as_str()))
    }

    /// Builds the severity resolution table from the overrides.
    #[must_use]
    pub fn issue_configuration(&self) -> IssueConfiguration {
        let mut configuration = IssueConfiguration::new();
        for (name, severity) in &self.issues {
            if let Some(issue) = Issue::from_name(name) {
                configuration.set_severity(issue, *severity);
            }
        }
        configuration
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// The config names an issue that does not exist.
    #[error("unknown issue name `{name}` in [issues]")]
    UnknownIssue {
        /// The unknown name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
fail_on = "warning"
min_sdk = 29
ignored_packages = ["android.icu"]

[rules.builder-conventions]
enabled = false

[issues]
acronym-name = "error"
"#;
        let config = Config::parse(toml).expect("valid config");
        assert_eq!(config.fail_on, Some(Severity::Warning));
        assert_eq!(config.min_sdk, 29);
        assert!(config.is_package_ignored("android.icu.text"));
        assert!(!config.is_package_ignored("android.app"));
        assert!(!config.is_rule_enabled("builder-conventions"));
        assert!(config.is_rule_enabled("naming-conventions"));
        assert_eq!(
            config.issue_configuration().severity(Issue::AcronymName),
            Severity::Error
        );
    }

    #[test]
    fn unknown_issue_name_is_rejected() {
        let toml = r#"
[issues]
no-such-issue = "error"
"#;
        assert!(matches!(
            Config::parse(toml),
            Err(ConfigError::UnknownIssue { .. })
        ));
    }
}
