//! The API lint engine.
//!
//! Walks every visible item of a codebase in source declaration order and
//! runs the registered [`ApiRule`]s against it. When a previous codebase is
//! supplied, only items the comparator classifies as newly added are
//! visited, so lint fires on new API surface only.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::comparator::CodebaseComparator;
use crate::config::Config;
use crate::model::{Codebase, ItemHandle, ItemId, ItemKind};
use crate::reporter::Reporter;
use crate::rule::{Allowlist, ApiRule, ApiRuleBox, LintContext};
use crate::tree::{accepted, Filter};
use crate::visitor::ComparisonVisitor;

/// Builder for configuring an [`ApiLint`] engine.
#[derive(Default)]
pub struct ApiLintBuilder {
    rules: Vec<ApiRuleBox>,
    config: Option<Config>,
    allowlist: Option<Allowlist>,
}

impl ApiLintBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: ApiRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: ApiRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the engine.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = ApiRuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the legacy-violation allowlist.
    #[must_use]
    pub fn allowlist(mut self, allowlist: Allowlist) -> Self {
        self.allowlist = Some(allowlist);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> ApiLint {
        ApiLint {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
            allowlist: self.allowlist.unwrap_or_default(),
        }
    }
}

/// The rule-evaluation engine.
pub struct ApiLint {
    rules: Vec<ApiRuleBox>,
    config: Config,
    allowlist: Allowlist,
}

/// Collects the ids of items reported as added, for delta-only linting.
#[derive(Default)]
struct AddedCollector {
    added: HashSet<ItemId>,
}

impl ComparisonVisitor for AddedCollector {
    fn added_item(&mut self, new: ItemHandle<'_>) {
        self.added.insert(new.id());
    }
}

impl ApiLint {
    /// Creates a new builder for configuring the engine.
    #[must_use]
    pub fn builder() -> ApiLintBuilder {
        ApiLintBuilder::new()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every enabled rule over the visible items of `codebase`.
    ///
    /// With a `previous` codebase, only items newly added relative to it
    /// are visited (per-member, via the comparator's added-recursively
    /// mode). Visitation always follows source declaration order, so
    /// diagnostics read top to bottom as in the file.
    pub fn check(
        &self,
        codebase: &Codebase,
        previous: Option<&Codebase>,
        reporter: &mut dyn Reporter,
        filter: Option<Filter<'_>>,
    ) {
        info!(
            codebase = codebase.description(),
            delta = previous.is_some(),
            "running api lint"
        );
        let added = previous.map(|old| {
            let mut collector = AddedCollector::default();
            CodebaseComparator::new()
                .visit_added_items_recursively(true)
                .compare(&mut collector, old, codebase, filter);
            debug!(count = collector.added.len(), "added items to lint");
            collector.added
        });

        let mut ctx = LintContext::new(reporter, &self.allowlist, filter, self.config.min_sdk);
        for package in codebase.packages() {
            if self.config.is_package_ignored(package.qualified_name()) {
                debug!(package = package.qualified_name(), "skipping ignored package");
                continue;
            }
            for class in package.nested_classes() {
                self.visit_class(class, added.as_ref(), filter, &mut ctx);
            }
        }
    }

    fn visit_class(
        &self,
        cls: ItemHandle<'_>,
        added: Option<&HashSet<ItemId>>,
        filter: Option<Filter<'_>>,
        ctx: &mut LintContext<'_>,
    ) {
        if cls.hidden() || !accepted(filter, cls) {
            return;
        }
        if self.should_lint(cls, added) {
            for rule in self.enabled_rules() {
                rule.check_class(cls, ctx);
            }
        }
        for member in cls.children() {
            match member.kind() {
                ItemKind::Method | ItemKind::Constructor => {
                    self.visit_method(member, added, filter, ctx);
                }
                ItemKind::Field => self.visit_field(member, added, filter, ctx),
                ItemKind::Class => self.visit_class(member, added, filter, ctx),
                _ => {}
            }
        }
    }

    fn visit_method(
        &self,
        method: ItemHandle<'_>,
        added: Option<&HashSet<ItemId>>,
        filter: Option<Filter<'_>>,
        ctx: &mut LintContext<'_>,
    ) {
        if !self.visible(method, filter) || !self.should_lint(method, added) {
            return;
        }
        for rule in self.enabled_rules() {
            rule.check_method(method, ctx);
            if let Some(returns) = method.item_type() {
                if !returns.is_void() {
                    rule.check_type(returns, method, ctx);
                }
            }
            for parameter in method.parameters() {
                if let Some(ty) = parameter.item_type() {
                    rule.check_type(ty, parameter, ctx);
                }
            }
        }
    }

    fn visit_field(
        &self,
        field: ItemHandle<'_>,
        added: Option<&HashSet<ItemId>>,
        filter: Option<Filter<'_>>,
        ctx: &mut LintContext<'_>,
    ) {
        if !self.visible(field, filter) || !self.should_lint(field, added) {
            return;
        }
        for rule in self.enabled_rules() {
            rule.check_field(field, ctx);
            if let Some(ty) = field.item_type() {
                rule.check_type(ty, field, ctx);
            }
        }
    }

    /// Deprecated items never trigger lint; their known issues stay known.
    fn visible(&self, item: ItemHandle<'_>, filter: Option<Filter<'_>>) -> bool {
        item.emit() && !item.hidden() && !item.effectively_deprecated() && accepted(filter, item)
    }

    fn should_lint(&self, item: ItemHandle<'_>, added: Option<&HashSet<ItemId>>) -> bool {
        if item.effectively_deprecated() {
            return false;
        }
        added.map_or(true, |set| set.contains(&item.id()))
    }

    fn enabled_rules(&self) -> impl Iterator<Item = &ApiRuleBox> {
        self.rules
            .iter()
            .filter(|rule| self.config.is_rule_enabled(rule.name()))
    }
}
