//! Signature type policy.
//!
//! Bans or discourages whole families of types in public signatures:
//! concrete collections, boxed primitives, odd-sized primitives, nullable
//! collections, pre-ICU text/date types, raw `Future`s and bare file
//! descriptors. Everything here is table data; the logic is one lookup per
//! type occurrence.

use api_surface_core::{ApiRule, Issue, ItemHandle, LintContext, Nullability, TypeItem};

/// Concrete collection type → the interface to expose instead.
const CONCRETE_COLLECTIONS: &[(&str, &str)] = &[
    ("java.util.ArrayList", "java.util.List"),
    ("java.util.LinkedList", "java.util.List"),
    ("java.util.Vector", "java.util.List"),
    ("java.util.Stack", "java.util.Deque"),
    ("java.util.HashMap", "java.util.Map"),
    ("java.util.LinkedHashMap", "java.util.Map"),
    ("java.util.TreeMap", "java.util.Map"),
    ("java.util.HashSet", "java.util.Set"),
    ("java.util.LinkedHashSet", "java.util.Set"),
    ("java.util.TreeSet", "java.util.Set"),
];

const COLLECTION_INTERFACES: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.Map",
    "java.util.Set",
];

/// Boxed primitive → the primitive to expose instead.
const BOXED_PRIMITIVES: &[(&str, &str)] = &[
    ("java.lang.Boolean", "boolean"),
    ("java.lang.Byte", "byte"),
    ("java.lang.Character", "char"),
    ("java.lang.Double", "double"),
    ("java.lang.Float", "float"),
    ("java.lang.Integer", "int"),
    ("java.lang.Long", "long"),
    ("java.lang.Short", "short"),
];

/// Legacy text/date type → the ICU replacement, usable from API level 24.
const ICU_REPLACEMENTS: &[(&str, &str)] = &[
    ("java.text.BreakIterator", "android.icu.text.BreakIterator"),
    ("java.text.Collator", "android.icu.text.Collator"),
    ("java.text.DateFormat", "android.icu.text.DateFormat"),
    ("java.text.NumberFormat", "android.icu.text.NumberFormat"),
    ("java.text.SimpleDateFormat", "android.icu.text.SimpleDateFormat"),
    ("java.util.Calendar", "android.icu.util.Calendar"),
    ("java.util.TimeZone", "android.icu.util.TimeZone"),
];

const ICU_MIN_SDK: u32 = 24;

const RAW_FUTURES: &[&str] = &[
    "java.util.concurrent.CompletableFuture",
    "java.util.concurrent.CompletionStage",
    "java.util.concurrent.Future",
];

fn lookup<'t>(table: &'t [(&str, &str)], name: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

/// Checks the type-policy tables against every signature type occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypePolicy;

impl TypePolicy {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ApiRule for TypePolicy {
    fn name(&self) -> &'static str {
        "type-policy"
    }

    fn description(&self) -> &'static str {
        "public signatures avoid banned and discouraged types"
    }

    fn check_type(&self, ty: &TypeItem, owner: ItemHandle<'_>, ctx: &mut LintContext<'_>) {
        let name = ty.qualified_name.as_str();
        if let Some(interface) = lookup(CONCRETE_COLLECTIONS, name) {
            ctx.report(
                Issue::ConcreteCollection,
                owner,
                &format!("use the interface `{interface}` instead of the concrete type `{name}`"),
            );
        }
        if let Some(primitive) = lookup(BOXED_PRIMITIVES, name) {
            ctx.report(
                Issue::AutoBoxing,
                owner,
                &format!("use the primitive `{primitive}` instead of the boxed `{name}`"),
            );
        }
        if matches!(name, "short" | "byte") && !ty.is_array() {
            ctx.report(
                Issue::NoByteOrShort,
                owner,
                &format!("avoid odd sized primitives; use `int` instead of `{name}`"),
            );
        }
        let is_collection = COLLECTION_INTERFACES.contains(&name)
            || lookup(CONCRETE_COLLECTIONS, name).is_some();
        if is_collection && ty.nullability == Nullability::Nullable {
            ctx.report(
                Issue::NullableCollection,
                owner,
                &format!("return an empty `{}` instead of null", ty.simple_name()),
            );
        }
        if ctx.min_sdk >= ICU_MIN_SDK {
            if let Some(icu) = lookup(ICU_REPLACEMENTS, name) {
                ctx.report(
                    Issue::UseIcu,
                    owner,
                    &format!("use `{icu}` instead of `{name}`"),
                );
            }
        }
        if RAW_FUTURES.contains(&name) {
            ctx.report(
                Issue::BadFuture,
                owner,
                &format!(
                    "use `com.google.common.util.concurrent.ListenableFuture` instead of `{name}`"
                ),
            );
        }
        if name == "java.io.FileDescriptor" {
            ctx.report(
                Issue::UseParcelFileDescriptor,
                owner,
                "use `android.os.ParcelFileDescriptor` instead of `java.io.FileDescriptor`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{issues, run_rule};
    use api_surface_core::{Codebase, CodebaseBuilder, TypeItem};

    fn method_returning(ty: TypeItem) -> Codebase {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Widget");
        cb.method(cls, "compute", ty);
        cb.build()
    }

    #[test]
    fn raw_future_return_is_flagged() {
        let ty = TypeItem::new("java.util.concurrent.Future")
            .with_arguments(vec![TypeItem::new("java.lang.String")]);
        let reports = run_rule(TypePolicy::new(), &method_returning(ty));
        assert_eq!(issues(&reports), vec![Issue::BadFuture]);
        assert!(reports[0].message.contains("ListenableFuture"));
    }

    #[test]
    fn concrete_collection_suggests_interface() {
        let reports = run_rule(
            TypePolicy::new(),
            &method_returning(TypeItem::new("java.util.HashMap")),
        );
        assert_eq!(issues(&reports), vec![Issue::ConcreteCollection]);
        assert!(reports[0].message.contains("java.util.Map"));
    }

    #[test]
    fn nullable_list_is_flagged() {
        let ty = TypeItem::new("java.util.List")
            .with_nullability(api_surface_core::Nullability::Nullable);
        let reports = run_rule(TypePolicy::new(), &method_returning(ty));
        assert_eq!(issues(&reports), vec![Issue::NullableCollection]);
    }

    #[test]
    fn icu_gate_respects_min_sdk() {
        use api_surface_core::{ApiLint, CollectingReporter, Config};

        let old_sdk = method_returning(TypeItem::new("java.util.Calendar"));
        assert!(run_rule(TypePolicy::new(), &old_sdk).is_empty());

        let mut config = Config::new();
        config.min_sdk = 24;
        let lint = ApiLint::builder().rule(TypePolicy::new()).config(config).build();
        let mut reporter = CollectingReporter::new();
        lint.check(&old_sdk, None, &mut reporter, None);
        assert_eq!(issues(reporter.reports()), vec![Issue::UseIcu]);
    }

    #[test]
    fn byte_array_passes_but_scalar_short_does_not() {
        let buffer = method_returning(TypeItem::new("byte").array(1));
        assert!(run_rule(TypePolicy::new(), &buffer).is_empty());

        let scalar = method_returning(TypeItem::new("short"));
        let reports = run_rule(TypePolicy::new(), &scalar);
        assert_eq!(issues(&reports), vec![Issue::NoByteOrShort]);
    }

    #[test]
    fn boxed_parameter_is_flagged() {
        let mut cb = CodebaseBuilder::new("fixture");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Widget");
        let m = cb.method(cls, "setCount", TypeItem::void());
        cb.parameter(m, "count", TypeItem::new("java.lang.Integer"));
        let reports = run_rule(TypePolicy::new(), &cb.build());
        assert_eq!(issues(&reports), vec![Issue::AutoBoxing]);
    }
}
