//! Callback surface for codebase comparison.
//!
//! [`CodebaseComparator`](crate::comparator::CodebaseComparator) drives one
//! of these through every structural difference between two codebases. The
//! dispatch is double-layered: the generic `*_item` overload fires first,
//! then the kind-specific overload, for every event, so implementations can
//! pick whichever granularity they need. All methods default to no-ops.

use crate::model::ItemHandle;

/// Receives matched, added and removed events from a comparison.
///
/// `removed` callbacks carry the class on the *other* side that used to (or
/// still does) contain the item, when one exists, so consumers can point at
/// the surviving container in diagnostics.
#[allow(unused_variables)]
pub trait ComparisonVisitor {
    /// When true (the default), constructor events dispatch through the
    /// method overloads instead of the constructor overloads.
    fn visit_constructors_as_methods(&self) -> bool {
        true
    }

    /// A matched pair, fired before the kind-specific compare overload.
    fn compare_item(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// An item present only in the new codebase, fired before the
    /// kind-specific added overload.
    fn added_item(&mut self, new: ItemHandle<'_>) {}
    /// An item present only in the old codebase, fired before the
    /// kind-specific removed overload.
    fn removed_item(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched packages.
    fn compare_package(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added package.
    fn added_package(&mut self, new: ItemHandle<'_>) {}
    /// Removed package.
    fn removed_package(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched classes.
    fn compare_class(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added class.
    fn added_class(&mut self, new: ItemHandle<'_>) {}
    /// Removed class.
    fn removed_class(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched methods (and constructors, unless
    /// [`visit_constructors_as_methods`](Self::visit_constructors_as_methods)
    /// is overridden to false).
    fn compare_method(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added method.
    fn added_method(&mut self, new: ItemHandle<'_>) {}
    /// Removed method.
    fn removed_method(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched constructors, only when constructor folding is disabled.
    fn compare_constructor(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added constructor.
    fn added_constructor(&mut self, new: ItemHandle<'_>) {}
    /// Removed constructor.
    fn removed_constructor(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched fields.
    fn compare_field(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added field.
    fn added_field(&mut self, new: ItemHandle<'_>) {}
    /// Removed field.
    fn removed_field(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched parameters.
    fn compare_parameter(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added parameter.
    fn added_parameter(&mut self, new: ItemHandle<'_>) {}
    /// Removed parameter.
    fn removed_parameter(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}

    /// Matched properties.
    fn compare_property(&mut self, old: ItemHandle<'_>, new: ItemHandle<'_>) {}
    /// Added property.
    fn added_property(&mut self, new: ItemHandle<'_>) {}
    /// Removed property.
    fn removed_property(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {}
}
