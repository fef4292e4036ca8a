//! Rule trait and lint context for API lint rules.

use std::collections::HashMap;

use crate::issue::Issue;
use crate::model::{ItemHandle, TypeItem};
use crate::reporter::Reporter;
use crate::tree::{accepted, Filter};

/// A design-convention rule over the API model.
///
/// Implementations are pure functions of the visited item and its filtered
/// siblings; every hook defaults to a no-op so a rule only implements the
/// granularities it cares about. A rule that cannot determine an answer
/// (unresolvable supertype, missing constant) simply returns without
/// reporting.
///
/// # Example
///
/// ```ignore
/// use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext};
///
/// pub struct NoFrobnicate;
///
/// impl ApiRule for NoFrobnicate {
///     fn name(&self) -> &'static str { "no-frobnicate" }
///
///     fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
///         if method.name() == "frobnicate" {
///             ctx.report(Issue::StartWithLower, method, "do not frobnicate");
///         }
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait ApiRule: Send + Sync {
    /// Kebab-case name of this rule (e.g. `"builder-conventions"`).
    fn name(&self) -> &'static str;

    /// Brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a visible class.
    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {}

    /// Checks a visible method or constructor.
    fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {}

    /// Checks a visible field.
    fn check_field(&self, field: ItemHandle<'_>, ctx: &mut LintContext<'_>) {}

    /// Checks one type occurrence: a return type, parameter type or field
    /// type. `owner` is the item the type appears on.
    fn check_type(&self, ty: &TypeItem, owner: ItemHandle<'_>, ctx: &mut LintContext<'_>) {}
}

/// Type alias for boxed rule trait objects.
pub type ApiRuleBox = Box<dyn ApiRule>;

/// Legacy-violation allow table.
///
/// Policy data, not logic: qualified names (or `*`-suffixed prefixes) of
/// pre-existing API that must stay exempt from specific issues so the rule
/// set remains backward compatible.
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    entries: HashMap<Issue, Vec<String>>,
}

impl Allowlist {
    /// Creates an empty allowlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds allowed qualified names or prefixes for an issue.
    pub fn allow<I, S>(&mut self, issue: Issue, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(issue)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    /// Whether the qualified name is exempt from the issue.
    #[must_use]
    pub fn contains(&self, issue: Issue, qualified_name: &str) -> bool {
        self.entries.get(&issue).is_some_and(|names| {
            names.iter().any(|entry| {
                if let Some(prefix) = entry.strip_suffix('*') {
                    qualified_name.starts_with(prefix)
                } else {
                    entry == qualified_name
                }
            })
        })
    }
}

/// Read-only lint environment plus the one report funnel.
pub struct LintContext<'a> {
    reporter: &'a mut dyn Reporter,
    allowlist: &'a Allowlist,
    filter: Option<Filter<'a>>,
    /// Minimum SDK level of the linted surface; gates SDK-dependent type
    /// recommendations.
    pub min_sdk: u32,
}

impl<'a> LintContext<'a> {
    /// Creates a context around a reporter.
    #[must_use]
    pub fn new(
        reporter: &'a mut dyn Reporter,
        allowlist: &'a Allowlist,
        filter: Option<Filter<'a>>,
        min_sdk: u32,
    ) -> Self {
        Self {
            reporter,
            allowlist,
            filter,
            min_sdk,
        }
    }

    /// Reports a finding, applying the universal suppressions first:
    /// deprecated items (and parameters of deprecated methods) are never
    /// flagged, items the emit filter rejects are never flagged, and
    /// allowlisted legacy violations are never flagged.
    pub fn report(&mut self, issue: Issue, item: ItemHandle<'_>, message: &str) {
        if item.effectively_deprecated() {
            return;
        }
        if item.hidden() || !item.emit() || !accepted(self.filter, item) {
            return;
        }
        if self.allowlist.contains(issue, item.qualified_name()) {
            return;
        }
        self.reporter.report(issue, item, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodebaseBuilder, TypeItem};
    use crate::reporter::CollectingReporter;

    #[test]
    fn allowlist_matches_exact_and_prefix() {
        let mut allow = Allowlist::new();
        allow.allow(Issue::UseParcelFileDescriptor, ["android.os.Foo.get"]);
        allow.allow(Issue::UseParcelFileDescriptor, ["android.system.*"]);

        assert!(allow.contains(Issue::UseParcelFileDescriptor, "android.os.Foo.get"));
        assert!(allow.contains(Issue::UseParcelFileDescriptor, "android.system.Os.dup"));
        assert!(!allow.contains(Issue::UseParcelFileDescriptor, "android.os.Foo.set"));
        assert!(!allow.contains(Issue::BadFuture, "android.os.Foo.get"));
    }

    #[test]
    fn funnel_suppresses_deprecated_items() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("pkg");
        let cls = cb.class(pkg, "Foo");
        let m = cb.method(cls, "getHTMLText", TypeItem::new("java.lang.String"));
        cb.set_deprecated(m, true);
        let codebase = cb.build();

        let allow = Allowlist::new();
        let mut reporter = CollectingReporter::new();
        let mut ctx = LintContext::new(&mut reporter, &allow, None, 0);
        ctx.report(Issue::AcronymName, codebase.handle(m), "acronym");
        assert!(reporter.reports().is_empty());
    }

    #[test]
    fn funnel_suppresses_allowlisted_names() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("pkg");
        let cls = cb.class(pkg, "Legacy");
        let m = cb.method(cls, "getURL", TypeItem::new("java.lang.String"));
        let codebase = cb.build();

        let mut allow = Allowlist::new();
        allow.allow(Issue::AcronymName, ["pkg.Legacy.getURL"]);
        let mut reporter = CollectingReporter::new();
        let mut ctx = LintContext::new(&mut reporter, &allow, None, 0);
        ctx.report(Issue::AcronymName, codebase.handle(m), "acronym");
        assert!(reporter.reports().is_empty());
    }
}
