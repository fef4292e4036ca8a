//! Listener/callback registration pairing.
//!
//! Listeners are registered through `addXListener`/`removeXListener` pairs
//! and callbacks through `registerXCallback`/`unregisterXCallback` pairs;
//! the counterpart is found by literal name search among sibling methods.
//! Mixing the two vocabularies (`addXCallback`, `registerXListener`) is a
//! naming issue of its own.

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext};

/// Checks registration-method pairing and naming.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPairs;

impl RegistrationPairs {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ApiRule for RegistrationPairs {
    fn name(&self) -> &'static str {
        "registration-pairs"
    }

    fn description(&self) -> &'static str {
        "add/remove and register/unregister methods come in pairs"
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        for method in cls.methods() {
            let name = method.name();
            if name.ends_with("Callback") || name.ends_with("Callbacks") {
                if let Some(rest) = name.strip_prefix("add") {
                    ctx.report(
                        Issue::RegistrationName,
                        method,
                        &format!("callback methods should be named register/unregister; was `add{rest}`"),
                    );
                } else if let Some(rest) = name.strip_prefix("register") {
                    let counterpart = format!("unregister{rest}");
                    if !cls.methods().any(|m| m.name() == counterpart) {
                        ctx.report(
                            Issue::PairedRegistration,
                            method,
                            &format!("found `{name}` but not the symmetric `{counterpart}`"),
                        );
                    }
                }
            } else if name.ends_with("Listener") || name.ends_with("Listeners") {
                if let Some(rest) = name.strip_prefix("register") {
                    ctx.report(
                        Issue::RegistrationName,
                        method,
                        &format!("listener methods should be named add/remove; was `register{rest}`"),
                    );
                } else if let Some(rest) = name.strip_prefix("add") {
                    let counterpart = format!("remove{rest}");
                    if !cls.methods().any(|m| m.name() == counterpart) {
                        ctx.report(
                            Issue::PairedRegistration,
                            method,
                            &format!("found `{name}` but not the symmetric `{counterpart}`"),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{issues, run_rule};
    use api_surface_core::{Codebase, CodebaseBuilder, TypeItem};

    fn class_with_methods(names: &[&str]) -> Codebase {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Widget");
        for name in names {
            let m = cb.method(cls, name, TypeItem::void());
            cb.parameter(m, "listener", TypeItem::new("android.pkg.OnClickListener"));
        }
        cb.build()
    }

    #[test]
    fn add_without_remove_is_flagged() {
        let codebase = class_with_methods(&["addOnClickListener"]);
        let reports = run_rule(RegistrationPairs::new(), &codebase);
        assert_eq!(issues(&reports), vec![Issue::PairedRegistration]);
        assert!(reports[0].message.contains("removeOnClickListener"));
    }

    #[test]
    fn matched_add_remove_pair_passes() {
        let codebase = class_with_methods(&["addOnClickListener", "removeOnClickListener"]);
        assert!(run_rule(RegistrationPairs::new(), &codebase).is_empty());
    }

    #[test]
    fn register_without_unregister_is_flagged() {
        let codebase = class_with_methods(&["registerScanCallback"]);
        let reports = run_rule(RegistrationPairs::new(), &codebase);
        assert_eq!(issues(&reports), vec![Issue::PairedRegistration]);
        assert!(reports[0].message.contains("unregisterScanCallback"));
    }

    #[test]
    fn mixed_vocabulary_is_a_naming_issue() {
        let codebase = class_with_methods(&["addScanCallback", "registerOnClickListener"]);
        let reports = run_rule(RegistrationPairs::new(), &codebase);
        assert_eq!(
            issues(&reports),
            vec![Issue::RegistrationName, Issue::RegistrationName]
        );
    }
}
