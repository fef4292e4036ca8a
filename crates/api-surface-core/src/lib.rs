//! # api-surface-core
//!
//! Core framework for tracking a library's public API surface: a normalized
//! item model, a tree-diff engine for comparing two API surfaces, and a
//! rule-evaluation engine for design-convention ("API lint") checks.
//!
//! This crate provides:
//!
//! - The [`Codebase`]/[`Item`] model and [`CodebaseBuilder`]
//! - [`CodebaseComparator`] driving a [`ComparisonVisitor`] through every
//!   structural difference between two codebases
//! - [`ApiLint`] running [`ApiRule`]s over visible (or newly added) items
//! - The [`Issue`] taxonomy and [`Reporter`] sink
//!
//! ## Example
//!
//! ```ignore
//! use api_surface_core::{ApiLint, CollectingReporter};
//! use api_surface_rules::all_rules;
//!
//! let lint = ApiLint::builder().rules(all_rules()).build();
//! let mut reporter = CollectingReporter::new();
//! lint.check(&codebase, None, &mut reporter, None);
//! print!("{}", reporter.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comparator;
mod config;
mod issue;
mod lint;
mod model;
mod ordering;
mod reporter;
mod rule;
mod tree;
mod visitor;

/// Signature-JSON interchange for codebases.
pub mod signature;

pub use comparator::CodebaseComparator;
pub use config::{Config, ConfigError, RuleConfig};
pub use issue::{Issue, Severity};
pub use lint::{ApiLint, ApiLintBuilder};
pub use model::{
    ClassKind, Codebase, CodebaseBuilder, ConstantValue, Item, ItemDetail, ItemHandle, ItemId,
    ItemKind, Modifiers, Nullability, TypeItem, Visibility,
};
pub use ordering::{compare_items, same_item};
pub use reporter::{
    CollectingReporter, IssueConfiguration, Report, ReportDiagnostic, Reporter,
};
pub use rule::{Allowlist, ApiRule, ApiRuleBox, LintContext};
pub use tree::{build_forest, Filter, ItemTree};
pub use visitor::ComparisonVisitor;
