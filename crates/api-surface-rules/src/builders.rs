//! Builder class structure.
//!
//! A `FooBuilder` is a static final inner class of the type it builds, has
//! a `build()` method, and its setters return the builder itself so calls
//! chain.

use api_surface_core::{ApiRule, ClassKind, Issue, ItemHandle, ItemKind, LintContext, Nullability};

/// Checks builder-class structure and setter chaining.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderConventions;

impl BuilderConventions {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ApiRule for BuilderConventions {
    fn name(&self) -> &'static str {
        "builder-conventions"
    }

    fn description(&self) -> &'static str {
        "builders are static final inner classes with chaining setters and build()"
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        if cls.class_kind() != Some(ClassKind::Class) || !cls.name().ends_with("Builder") {
            return;
        }
        let nested = cls.parent().is_some_and(|p| p.kind() == ItemKind::Class);
        if !nested {
            ctx.report(
                Issue::TopLevelBuilder,
                cls,
                &format!(
                    "builder `{}` should be defined as an inner class of the type it builds",
                    cls.name()
                ),
            );
        }
        let modifiers = cls.modifiers();
        let mut missing = Vec::new();
        if nested && !modifiers.is_static {
            missing.push("static");
        }
        if !modifiers.is_final {
            missing.push("final");
        }
        if !missing.is_empty() {
            ctx.report(
                Issue::StaticFinalBuilder,
                cls,
                &format!(
                    "builder `{}` should be static and final; missing `{}`",
                    cls.name(),
                    missing.join("`, `")
                ),
            );
        }
        let has_build = cls
            .methods()
            .any(|m| m.name() == "build" && m.item_type().is_some_and(|ty| !ty.is_void()));
        if !has_build {
            ctx.report(
                Issue::MissingBuildMethod,
                cls,
                &format!("builder `{}` should declare a `build()` method", cls.name()),
            );
        }
        for setter in cls.methods().filter(|m| m.name().starts_with("set")) {
            let Some(returns) = setter.item_type() else {
                continue;
            };
            if returns.qualified_name != cls.qualified_name() {
                ctx.report(
                    Issue::SetterReturnsThis,
                    setter,
                    &format!(
                        "`{}` should return the builder `{}` so calls chain",
                        setter.name(),
                        cls.name()
                    ),
                );
            } else if returns.nullability == Nullability::Nullable {
                ctx.report(
                    Issue::SetterReturnsThis,
                    setter,
                    &format!("`{}` should not return a nullable builder", setter.name()),
                );
            }
        }
    }
}
