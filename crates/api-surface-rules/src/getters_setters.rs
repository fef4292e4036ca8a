//! Getter/setter symmetry checks.
//!
//! A boolean getter `isX`/`hasX`/`canX`/`shouldX` pairs with a setter named
//! `setX`. A sibling named `setIsX` (or `setHasX`, ...) breaks the property
//! pairing that code generators and Kotlin property syntax rely on.

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext};

const BOOLEAN_PREFIXES: &[&str] = &["is", "has", "can", "should"];

/// Checks that boolean getters pair with a conventionally named setter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetterSetterConventions;

impl GetterSetterConventions {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn returns_boolean(method: ItemHandle<'_>) -> bool {
        method.item_type().is_some_and(|ty| {
            matches!(ty.qualified_name.as_str(), "boolean" | "java.lang.Boolean")
        })
    }

    /// `isX` → `(X, Is)`, for suffix and capitalized prefix.
    fn split_getter(name: &str) -> Option<(&str, String)> {
        for prefix in BOOLEAN_PREFIXES {
            if let Some(suffix) = name.strip_prefix(prefix) {
                if suffix.chars().next().is_some_and(char::is_uppercase) {
                    let mut capitalized = String::with_capacity(prefix.len());
                    let mut chars = prefix.chars();
                    if let Some(first) = chars.next() {
                        capitalized.extend(first.to_uppercase());
                    }
                    capitalized.push_str(chars.as_str());
                    return Some((suffix, capitalized));
                }
            }
        }
        None
    }
}

impl ApiRule for GetterSetterConventions {
    fn name(&self) -> &'static str {
        "getter-setter-conventions"
    }

    fn description(&self) -> &'static str {
        "boolean getters pair with a setX setter"
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        for getter in cls.methods() {
            if !Self::returns_boolean(getter) {
                continue;
            }
            let Some((suffix, prefix)) = Self::split_getter(getter.name()) else {
                continue;
            };
            let expected = format!("set{suffix}");
            let mismatched = format!("set{prefix}{suffix}");
            if let Some(setter) = cls.methods().find(|m| m.name() == mismatched) {
                ctx.report(
                    Issue::GetterSetterNames,
                    setter,
                    &format!(
                        "symmetric method for `{}` should be named `{expected}`, was `{mismatched}`",
                        getter.name()
                    ),
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

    fn class_with_pair(getter: &str, setter: &str) -> Codebase {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Widget");
        cb.method(cls, getter, TypeItem::new("boolean"));
        let s = cb.method(cls, setter, TypeItem::void());
        cb.parameter(s, "value", TypeItem::new("boolean"));
        cb.build()
    }

    #[test]
    fn is_with_set_is_reports_expected_name() {
        let codebase = class_with_pair("isEnabled", "setIsEnabled");
        let reports = run_rule(GetterSetterConventions::new(), &codebase);
        assert_eq!(issues(&reports), vec![Issue::GetterSetterNames]);
        assert!(reports[0].item.contains("setIsEnabled"));
        assert!(reports[0].message.contains("`setEnabled`"));
    }

    #[test]
    fn conventional_pair_passes() {
        let codebase = class_with_pair("isEnabled", "setEnabled");
        assert!(run_rule(GetterSetterConventions::new(), &codebase).is_empty());
    }

    #[test]
    fn plain_getter_setter_pair_passes() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Point");
        cb.method(cls, "getX", TypeItem::new("int"));
        let s = cb.method(cls, "setX", TypeItem::void());
        cb.parameter(s, "x", TypeItem::new("int"));
        assert!(run_rule(GetterSetterConventions::new(), &cb.build()).is_empty());
    }

    #[test]
    fn has_prefix_is_checked_too() {
        let codebase = class_with_pair("hasFocus", "setHasFocus");
        let reports = run_rule(GetterSetterConventions::new(), &codebase);
        assert_eq!(issues(&reports), vec![Issue::GetterSetterNames]);
        assert!(reports[0].message.contains("`setFocus`"));
    }
}
