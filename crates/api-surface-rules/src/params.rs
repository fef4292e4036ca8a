//! Parameter-ordering checks.
//!
//! `Context` and `ContentResolver` parameters lead the parameter list;
//! listener and callback parameters trail it (so Kotlin callers can use
//! trailing-lambda syntax).

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext, TypeItem};

const LEADING_TYPES: &[&str] = &["android.content.Context", "android.content.ContentResolver"];

/// Checks Context-first and listener-last parameter ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterOrder;

impl ParameterOrder {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_trailing(ty: &TypeItem) -> bool {
        let simple = ty.simple_name();
        simple.ends_with("Listener") || simple.ends_with("Callback")
    }
}

impl ApiRule for ParameterOrder {
    fn name(&self) -> &'static str {
        "parameter-order"
    }

    fn description(&self) -> &'static str {
        "Context parameters lead, listener parameters trail"
    }

    fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let parameters: Vec<ItemHandle<'_>> = method.parameters().collect();
        for (index, parameter) in parameters.iter().enumerate() {
            let Some(ty) = parameter.item_type() else {
                continue;
            };
            if index > 0 && LEADING_TYPES.contains(&ty.qualified_name.as_str()) {
                ctx.report(
                    Issue::ContextFirst,
                    *parameter,
                    &format!(
                        "parameter `{}` of type `{}` should be the first parameter",
                        parameter.name(),
                        ty.simple_name()
                    ),
                );
            }
            let followed_by_plain = parameters[index + 1..].iter().any(|later| {
                later.item_type().map_or(true, |t| !Self::is_trailing(t))
            });
            if Self::is_trailing(ty) && followed_by_plain {
                ctx.report(
                    Issue::ListenerLast,
                    *parameter,
                    &format!(
                        "parameter `{}` of type `{}` should be the last parameter",
                        parameter.name(),
                        ty.simple_name()
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

    fn method_with_params(params: &[(&str, &str)]) -> Codebase {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Widget");
        let m = cb.method(cls, "configure", TypeItem::void());
        for (name, ty) in params {
            cb.parameter(m, name, TypeItem::new(*ty));
        }
        cb.build()
    }

    #[test]
    fn context_not_first_is_flagged() {
        let codebase = method_with_params(&[
            ("name", "java.lang.String"),
            ("context", "android.content.Context"),
        ]);
        let reports = run_rule(ParameterOrder::new(), &codebase);
        assert_eq!(issues(&reports), vec![Issue::ContextFirst]);
    }

    #[test]
    fn context_first_passes() {
        let codebase = method_with_params(&[
            ("context", "android.content.Context"),
            ("name", "java.lang.String"),
        ]);
        assert!(run_rule(ParameterOrder::new(), &codebase).is_empty());
    }

    #[test]
    fn listener_not_last_is_flagged() {
        let codebase = method_with_params(&[
            ("listener", "android.pkg.OnClickListener"),
            ("flags", "int"),
        ]);
        let reports = run_rule(ParameterOrder::new(), &codebase);
        assert_eq!(issues(&reports), vec![Issue::ListenerLast]);
    }

    #[test]
    fn trailing_listeners_pass() {
        let codebase = method_with_params(&[
            ("flags", "int"),
            ("executor", "android.pkg.ScanCallback"),
            ("listener", "android.pkg.OnClickListener"),
        ]);
        assert!(run_rule(ParameterOrder::new(), &codebase).is_empty());
    }
}
