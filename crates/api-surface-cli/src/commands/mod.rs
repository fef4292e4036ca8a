//! CLI subcommands.

pub mod diff;
pub mod lint;
pub mod list_issues;
pub mod output;
