//! equals/hashCode pairing.

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext};

/// Checks that `equals(Object)` and `hashCode()` are overridden together.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualsHashCode;

impl EqualsHashCode {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_equals(method: ItemHandle<'_>) -> bool {
        if method.name() != "equals" {
            return false;
        }
        let mut parameters = method.parameters();
        let first = parameters.next();
        parameters.next().is_none()
            && first
                .and_then(|p| p.item_type())
                .is_some_and(|ty| ty.qualified_name == "java.lang.Object")
    }

    fn is_hash_code(method: ItemHandle<'_>) -> bool {
        method.name() == "hashCode" && method.parameters().next().is_none()
    }
}

impl ApiRule for EqualsHashCode {
    fn name(&self) -> &'static str {
        "equals-hash-code"
    }

    fn description(&self) -> &'static str {
        "equals and hashCode are overridden together"
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let has_equals = cls.methods().any(Self::is_equals);
        let has_hash_code = cls.methods().any(Self::is_hash_code);
        if has_equals != has_hash_code {
            let missing = if has_equals { "hashCode" } else { "equals" };
            ctx.report(
                Issue::EqualsAndHashCode,
                cls,
                &format!("must override both equals and hashCode; missing one for `{missing}`"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{issues, run_rule};
    use api_surface_core::{Codebase, CodebaseBuilder, TypeItem};

    fn class_with(equals: bool, hash_code: bool) -> Codebase {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Point");
        if equals {
            let m = cb.method(cls, "equals", TypeItem::new("boolean"));
            cb.parameter(m, "other", TypeItem::new("java.lang.Object"));
        }
        if hash_code {
            cb.method(cls, "hashCode", TypeItem::new("int"));
        }
        cb.build()
    }

    #[test]
    fn equals_without_hash_code_is_flagged() {
        let reports = run_rule(EqualsHashCode::new(), &class_with(true, false));
        assert_eq!(issues(&reports), vec![Issue::EqualsAndHashCode]);
        assert!(reports[0].message.contains("hashCode"));
    }

    #[test]
    fn hash_code_without_equals_is_flagged() {
        let reports = run_rule(EqualsHashCode::new(), &class_with(false, true));
        assert_eq!(issues(&reports), vec![Issue::EqualsAndHashCode]);
        assert!(reports[0].message.contains("`equals`"));
    }

    #[test]
    fn both_or_neither_pass() {
        assert!(run_rule(EqualsHashCode::new(), &class_with(true, true)).is_empty());
        assert!(run_rule(EqualsHashCode::new(), &class_with(false, false)).is_empty());
    }

    #[test]
    fn equals_with_other_signature_does_not_count() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Point");
        let m = cb.method(cls, "equals", TypeItem::new("boolean"));
        cb.parameter(m, "other", TypeItem::new("android.pkg.Point"));
        cb.method(cls, "hashCode", TypeItem::new("int"));
        let reports = run_rule(EqualsHashCode::new(), &cb.build());
        assert_eq!(issues(&reports), vec![Issue::EqualsAndHashCode]);
    }
}
