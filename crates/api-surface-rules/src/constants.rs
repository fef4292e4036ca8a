//! Constant-field conventions.
//!
//! Constants are `ALL_CAPS` static finals, `MIN_`/`MAX_` names are reserved
//! for compile-time constants, and `FLAG_`-family bitmask values must not
//! reuse bits already claimed by an earlier flag in the same prefix scope.

use std::collections::HashMap;

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext};

use crate::util::is_constant_case;

/// Checks constant naming and flag-bitmask consistency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantConventions;

impl ConstantConventions {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The overlap scope of a flag constant: everything before the last
    /// underscore, so `FLAG_A` and `FLAG_B` share the scope `FLAG`.
    fn flag_scope(name: &str) -> Option<&str> {
        if !name.starts_with("FLAG_") {
            return None;
        }
        name.rfind('_').map(|i| &name[..i])
    }
}

impl ApiRule for ConstantConventions {
    fn name(&self) -> &'static str {
        "constant-conventions"
    }

    fn description(&self) -> &'static str {
        "constants are ALL_CAPS static finals with non-overlapping flag bits"
    }

    fn check_field(&self, field: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let name = field.name();
        let modifiers = field.modifiers();
        if modifiers.is_static && modifiers.is_final && !is_constant_case(name) {
            ctx.report(
                Issue::AllUpper,
                field,
                &format!("constant `{name}` should be named with all caps, like `FIELD_NAME`"),
            );
        }
        if (name.starts_with("MIN_") || name.starts_with("MAX_"))
            && !(modifiers.is_static && modifiers.is_final)
        {
            ctx.report(
                Issue::MinMaxConstant,
                field,
                &format!("`{name}` should only be used for a static final constant"),
            );
        }
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        // running OR of the bits seen per flag scope, in field source order
        let mut seen: HashMap<&str, Vec<(&str, i64)>> = HashMap::new();
        for field in cls.fields() {
            let modifiers = field.modifiers();
            if !modifiers.is_static || !modifiers.is_final {
                continue;
            }
            let Some(value) = field.constant_value().and_then(|c| c.as_int()) else {
                continue;
            };
            let Some(scope) = Self::flag_scope(field.name()) else {
                continue;
            };
            let prior = seen.entry(scope).or_default();
            if let Some((name, bits)) = prior.iter().find(|(_, bits)| bits & value != 0) {
                ctx.report(
                    Issue::OverlappingConstants,
                    field,
                    &format!(
                        "constant `{}` (0x{value:x}) overlaps bits of `{name}` (0x{bits:x})",
                        field.name()
                    ),
                );
            }
            prior.push((field.name(), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{issues, run_rule};
    use api_surface_core::{Codebase, CodebaseBuilder, ConstantValue, ItemId, TypeItem};

    fn constant(
        cb: &mut CodebaseBuilder,
        cls: ItemId,
        name: &str,
        value: i64,
    ) -> ItemId {
        let f = cb.field(cls, name, TypeItem::new("int"));
        let m = cb.modifiers_mut(f);
        m.is_static = true;
        m.is_final = true;
        cb.set_constant(f, ConstantValue::Int(value));
        f
    }

    #[test]
    fn overlapping_flag_bits_report_on_the_later_constant() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Flags");
        constant(&mut cb, cls, "FLAG_A", 0x1);
        constant(&mut cb, cls, "FLAG_B", 0x3);
        let reports = run_rule(ConstantConventions::new(), &cb.build());
        assert_eq!(issues(&reports), vec![Issue::OverlappingConstants]);
        assert!(reports[0].item.contains("FLAG_B"));
        assert!(reports[0].message.contains("FLAG_A"));
    }

    #[test]
    fn disjoint_flag_bits_pass() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Flags");
        constant(&mut cb, cls, "FLAG_A", 0x1);
        constant(&mut cb, cls, "FLAG_B", 0x2);
        constant(&mut cb, cls, "FLAG_C", 0x4);
        assert!(run_rule(ConstantConventions::new(), &cb.build()).is_empty());
    }

    #[test]
    fn different_scopes_do_not_interact() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Flags");
        constant(&mut cb, cls, "FLAG_MODE_A", 0x1);
        constant(&mut cb, cls, "FLAG_STATE_A", 0x1);
        assert!(run_rule(ConstantConventions::new(), &cb.build()).is_empty());
    }

    #[test]
    fn lower_case_constant_is_flagged() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Flags");
        let f = cb.field(cls, "defaultTimeout", TypeItem::new("int"));
        let m = cb.modifiers_mut(f);
        m.is_static = true;
        m.is_final = true;
        let reports = run_rule(ConstantConventions::new(), &cb.build());
        assert_eq!(issues(&reports), vec![Issue::AllUpper]);
    }

    #[test]
    fn min_prefix_requires_static_final() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Limits");
        cb.field(cls, "MIN_VALUE", TypeItem::new("int"));
        let reports = run_rule(ConstantConventions::new(), &cb.build());
        assert_eq!(issues(&reports), vec![Issue::MinMaxConstant]);
    }
}
