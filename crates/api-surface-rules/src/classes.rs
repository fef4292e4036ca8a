//! Class-structure checks.
//!
//! Managers and singletons hide their constructors, utility classes are not
//! instantiable, inner classes meant for subclassing are static, enums stay
//! out of the API, resource holders implement `AutoCloseable`, and internal
//! locking never shows up in a signature.

use api_surface_core::{ApiRule, ClassKind, Issue, ItemHandle, ItemKind, LintContext, TypeItem};

/// Checks class shape: constructors, nesting, enums and closeability.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassStructure;

impl ClassStructure {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn visible_constructor<'a>(cls: &ItemHandle<'a>) -> Option<ItemHandle<'a>> {
        cls.constructors()
            .find(|c| c.modifiers().visibility.is_api_surface())
    }

    /// Every method and field static, with at least one of either.
    fn is_fully_static(cls: &ItemHandle<'_>) -> bool {
        let mut members = 0;
        for member in cls.methods().chain(cls.fields()) {
            if !member.modifiers().is_static {
                return false;
            }
            members += 1;
        }
        members > 0
    }

    fn is_release_method(method: &ItemHandle<'_>) -> bool {
        matches!(method.name(), "close" | "release")
            && method.parameters().next().is_none()
            && method.item_type().map_or(true, TypeItem::is_void)
    }
}

impl ApiRule for ClassStructure {
    fn name(&self) -> &'static str {
        "class-structure"
    }

    fn description(&self) -> &'static str {
        "constructor visibility, nesting, enum and closeability conventions"
    }

    fn check_class(&self, cls: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        if cls.class_kind() == Some(ClassKind::Enum) {
            ctx.report(
                Issue::EnumClass,
                cls,
                "enums are discouraged in APIs; use integer constants instead",
            );
        }
        if cls.class_kind() != Some(ClassKind::Class) {
            return;
        }

        if let Some(constructor) = Self::visible_constructor(&cls) {
            if cls.name().ends_with("Manager") {
                ctx.report(
                    Issue::ManagerConstructor,
                    constructor,
                    &format!(
                        "manager `{}` should always be obtained from a Context; remove the public constructor",
                        cls.name()
                    ),
                );
            } else if cls.methods().any(|m| m.name() == "getInstance" && m.modifiers().is_static) {
                ctx.report(
                    Issue::SingletonConstructor,
                    constructor,
                    "singletons should use getInstance() with a private constructor",
                );
            } else if Self::is_fully_static(&cls) {
                ctx.report(
                    Issue::StaticUtils,
                    constructor,
                    &format!(
                        "fully-static utility class `{}` should not have a public constructor",
                        cls.name()
                    ),
                );
            }
        }

        let nested_in_class = cls.parent().is_some_and(|p| p.kind() == ItemKind::Class);
        let modifiers = cls.modifiers();
        if nested_in_class && modifiers.is_abstract && !modifiers.is_static {
            ctx.report(
                Issue::AbstractInner,
                cls,
                &format!(
                    "abstract inner class `{}` should be a static nested class",
                    cls.name()
                ),
            );
        }

        let releases = cls.methods().any(|m| Self::is_release_method(&m));
        let closeable = cls.extends_or_implements("java.lang.AutoCloseable")
            || cls.extends_or_implements("java.io.Closeable");
        if releases && !closeable {
            ctx.report(
                Issue::NotCloseable,
                cls,
                &format!(
                    "class `{}` releases resources but does not implement AutoCloseable",
                    cls.name()
                ),
            );
        }
    }

    fn check_method(&self, method: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        if method.modifiers().is_synchronized {
            ctx.report(
                Issue::VisiblySynchronized,
                method,
                &format!(
                    "`{}` exposes an internal lock; remove synchronized from the signature",
                    method.name()
                ),
            );
        }
    }
}
