//! Throws-clause policy.
//!
//! Methods must not declare generic exceptions (`Exception`, `Throwable`,
//! `Error`) and must not declare unchecked exceptions at all.

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext};

const GENERIC_EXCEPTIONS: &[&str] = &[
    "java.lang.Error",
    "java.lang.Exception",
    "java.lang.Throwable",
];

const UNCHECKED_EXCEPTIONS: &[&str] = &[
    "java.lang.ArithmeticException",
    "java.lang.ArrayIndexOutOfBoundsException",
    "java.lang.ClassCastException",
    "java.lang.IllegalArgumentException",
    "java.lang.IllegalStateException",
    "java.lang.IndexOutOfBoundsException",
    "java.lang.NullPointerException",
    "java.lang.NumberFormatException",
    "java.lang.RuntimeException",
    "java.lang.UnsupportedOperationException",
];

/// Checks declared exceptions against the throws policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionPolicy;

impl ExceptionPolicy {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ApiRule for ExceptionPolicy {
    fn name(&self) -> &'static str {
        "exception-policy"
    }

    fn description(&self) -> &'static str {
        "no generic or unchecked exceptions in throws clauses"
    }

    fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        for thrown in method.throws() {
            let thrown = thrown.as_str();
            if GENERIC_EXCEPTIONS.contains(&thrown) {
                ctx.report(
                    Issue::GenericException,
                    method,
                    &format!("methods must not throw the generic exception `{thrown}`"),
                );
            } else if UNCHECKED_EXCEPTIONS.contains(&thrown) {
                ctx.report(
                    Issue::BannedThrow,
                    method,
                    &format!("methods must not mention the unchecked exception `{thrown}` in their throws clause"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{issues, run_rule};
    use api_surface_core::{Codebase, CodebaseBuilder, TypeItem};

    fn method_throwing(exceptions: &[&str]) -> Codebase {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Widget");
        let m = cb.method(cls, "load", TypeItem::void());
        cb.set_throws(m, exceptions.iter().map(ToString::to_string).collect());
        cb.build()
    }

    #[test]
    fn generic_exception_is_flagged() {
        let reports = run_rule(ExceptionPolicy::new(), &method_throwing(&["java.lang.Exception"]));
        assert_eq!(issues(&reports), vec![Issue::GenericException]);
    }

    #[test]
    fn unchecked_exception_is_flagged() {
        let reports = run_rule(
            ExceptionPolicy::new(),
            &method_throwing(&["java.lang.IllegalStateException"]),
        );
        assert_eq!(issues(&reports), vec![Issue::BannedThrow]);
    }

    #[test]
    fn checked_exception_passes() {
        let codebase = method_throwing(&["java.io.IOException"]);
        assert!(run_rule(ExceptionPolicy::new(), &codebase).is_empty());
    }

    #[test]
    fn each_declared_exception_is_checked() {
        let reports = run_rule(
            ExceptionPolicy::new(),
            &method_throwing(&["java.lang.Throwable", "java.lang.NullPointerException"]),
        );
        assert_eq!(
            issues(&reports),
            vec![Issue::GenericException, Issue::BannedThrow]
        );
    }
}
