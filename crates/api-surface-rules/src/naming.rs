//! Camel-case and acronym naming checks.
//!
//! Methods and fields use lowerCamelCase, classes use UpperCamelCase, class
//! names do not leak implementation details through an `Impl` suffix, and
//! embedded acronyms are written as words (`getHtmlText`, not `getHTMLText`)
//! so generated accessors and Kotlin property syntax stay predictable.

use api_surface_core::{ApiRule, Issue, ItemHandle, ItemKind, LintContext};

use crate::util::{
    decapitalize_acronyms, has_acronym, is_constant_case, starts_with_lower, starts_with_upper,
};

/// Checks camel-case conventions and acronym usage in API names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingConventions;

impl NamingConventions {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_acronym(item: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let name = item.name();
        if has_acronym(name) {
            ctx.report(
                Issue::AcronymName,
                item,
                &format!(
                    "acronyms should not be capitalized in {} names: was `{name}`, should this be `{}`?",
                    item.kind().label(),
                    decapitalize_acronyms(name)
                ),
            );
        }
    }
}

impl ApiRule for NamingConventions {
    fn name(&self) -> &'static str {
        "naming-conventions"
    }

    fn description(&self) -> &'static str {
        "API names use camel case, without acronyms or Impl suffixes"
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let name = cls.name();
        if !starts_with_upper(name) {
            ctx.report(
                Issue::StartWithUpper,
                cls,
                &format!("class name `{name}` should start with an uppercase letter"),
            );
        }
        if name.ends_with("Impl") {
            ctx.report(
                Issue::EndsWithImpl,
                cls,
                &format!("class name `{name}` should not end with `Impl`"),
            );
        }
        Self::check_acronym(cls, ctx);
    }

    fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        if method.kind() == ItemKind::Constructor {
            return;
        }
        let name = method.name();
        if !starts_with_lower(name) {
            ctx.report(
                Issue::StartWithLower,
                method,
                &format!("method name `{name}` should start with a lowercase letter"),
            );
        }
        Self::check_acronym(method, ctx);
    }

    fn check_field(&self, field: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let modifiers = field.modifiers();
        if modifiers.is_static && modifiers.is_final {
            // constants are covered by constant-conventions
            return;
        }
        let name = field.name();
        if !starts_with_lower(name) && !is_constant_case(name) {
            ctx.report(
                Issue::StartWithLower,
                field,
                &format!("field name `{name}` should start with a lowercase letter"),
            );
        }
        Self::check_acronym(field, ctx);
    }
}
