//! Kotlin operator-overload detection.
//!
//! A method whose name and arity match a Kotlin operator convention can be
//! invoked with operator syntax from Kotlin; marking it `operator` makes
//! that explicit and keeps the two call forms in sync.

use api_surface_core::{ApiRule, Issue, ItemHandle, ItemKind, LintContext};

/// Minimum and optional maximum parameter count per operator name.
const OPERATORS: &[(&str, usize, Option<usize>)] = &[
    ("compareTo", 1, Some(1)),
    ("contains", 1, Some(1)),
    ("dec", 0, Some(0)),
    ("div", 1, Some(1)),
    ("get", 1, None),
    ("inc", 0, Some(0)),
    ("invoke", 0, None),
    ("minus", 1, Some(1)),
    ("not", 0, Some(0)),
    ("plus", 1, Some(1)),
    ("rangeTo", 1, Some(1)),
    ("rem", 1, Some(1)),
    ("set", 2, None),
    ("times", 1, Some(1)),
    ("unaryMinus", 0, Some(0)),
    ("unaryPlus", 0, Some(0)),
];

/// Flags methods that match a Kotlin operator convention without being
/// declared `operator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinOperators;

impl KotlinOperators {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ApiRule for KotlinOperators {
    fn name(&self) -> &'static str {
        "kotlin-operators"
    }

    fn description(&self) -> &'static str {
        "operator-convention methods carry the operator keyword"
    }

    fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        if method.kind() == ItemKind::Constructor {
            return;
        }
        let modifiers = method.modifiers();
        if modifiers.is_operator || modifiers.is_static {
            return;
        }
        let arity = method.parameters().count();
        let matched = OPERATORS.iter().any(|&(name, min, max)| {
            name == method.name() && arity >= min && max.map_or(true, |max| arity <= max)
        });
        if matched {
            ctx.report(
                Issue::KotlinOperator,
                method,
                &format!(
                    "method `{}` can be invoked as a Kotlin operator; consider adding the `operator` keyword",
                    method.name()
                ),
            );
        }
    }
}
