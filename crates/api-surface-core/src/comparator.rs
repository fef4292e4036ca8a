//! Alignment of two codebases.
//!
//! A classic sorted-merge diff applied recursively per tree level, with one
//! domain-specific twist: apparent adds and removes of methods and fields
//! are reclassified as plain changes when the member is otherwise inherited
//! unchanged from a supertype. Overriding an inherited method must not read
//! as "API added", and dropping an override whose inherited behavior
//! survives must not read as "API removed".

use std::cmp::Ordering;

use tracing::debug;

use crate::model::{Codebase, ItemHandle, ItemKind};
use crate::ordering::{compare_items, same_item};
use crate::tree::{build_forest, emitted, Filter, ItemTree};
use crate::visitor::ComparisonVisitor;

/// Aligns two ordered forests and reports every difference to a
/// [`ComparisonVisitor`].
#[derive(Debug, Default, Clone)]
pub struct CodebaseComparator {
    visit_added_items_recursively: bool,
}

impl CodebaseComparator {
    /// Creates a comparator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, every descendant of a newly added subtree is visited
    /// individually instead of only the top-level added item.
    #[must_use]
    pub fn visit_added_items_recursively(mut self, enabled: bool) -> Self {
        self.visit_added_items_recursively = enabled;
        self
    }

    /// Compares `old` against `new`, dispatching events to `visitor`.
    ///
    /// The filter governs both which items surface as events and which
    /// supertype members are considered during reclassification.
    pub fn compare(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        old: &Codebase,
        new: &Codebase,
        filter: Option<Filter<'_>>,
    ) {
        self.compare_merged(visitor, &[old], &[new], filter);
    }

    /// Compares two merged codebase stacks (e.g. partial API plus base API
    /// on either side).
    pub fn compare_merged(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        old: &[&Codebase],
        new: &[&Codebase],
        filter: Option<Filter<'_>>,
    ) {
        debug!(
            old = old.iter().map(|c| c.description()).collect::<Vec<_>>().join("+"),
            new = new.iter().map(|c| c.description()).collect::<Vec<_>>().join("+"),
            "comparing codebases"
        );
        let old_forest = build_forest(old, filter);
        let new_forest = build_forest(new, filter);
        self.compare_levels(
            visitor,
            &old_forest.children,
            &new_forest.children,
            None,
            None,
            filter,
        );
    }

    /// The per-level merge walk. `old_parent`/`new_parent` thread the
    /// enclosing pair down for the inheritance fallback lookups.
    fn compare_levels(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        old_level: &[ItemTree<'_>],
        new_level: &[ItemTree<'_>],
        old_parent: Option<ItemHandle<'_>>,
        new_parent: Option<ItemHandle<'_>>,
        filter: Option<Filter<'_>>,
    ) {
        let mut i1 = 0;
        let mut i2 = 0;
        while i1 < old_level.len() && i2 < new_level.len() {
            let old_node = &old_level[i1];
            let new_node = &new_level[i2];
            let (Some(old_item), Some(new_item)) = (old_node.item, new_node.item) else {
                unreachable!("synthetic root nested inside a forest level");
            };
            match compare_items(old_item, new_item) {
                Ordering::Less => {
                    self.handle_removed(visitor, old_node, new_parent, filter);
                    i1 += 1;
                }
                Ordering::Greater => {
                    self.handle_added(visitor, new_node, old_parent, filter);
                    i2 += 1;
                }
                Ordering::Equal => {
                    let old_emitted = emitted(filter, old_item);
                    let new_emitted = emitted(filter, new_item);
                    match (old_emitted, new_emitted) {
                        (true, true) => dispatch_compare(visitor, old_item, new_item),
                        (false, true) => dispatch_added(visitor, new_item),
                        (true, false) => dispatch_removed(visitor, old_item, new_parent),
                        // Neither side emitted: no event, but the structure
                        // below may still matter (nested classes).
                        (false, false) => {}
                    }
                    self.compare_levels(
                        visitor,
                        &old_node.children,
                        &new_node.children,
                        Some(old_item),
                        Some(new_item),
                        filter,
                    );
                    i1 += 1;
                    i2 += 1;
                }
            }
        }
        while i1 < old_level.len() {
            self.handle_removed(visitor, &old_level[i1], new_parent, filter);
            i1 += 1;
        }
        while i2 < new_level.len() {
            self.handle_added(visitor, &new_level[i2], old_parent, filter);
            i2 += 1;
        }
    }

    /// An item with no counterpart in the new forest.
    ///
    /// Before reporting a removal, check whether the new side's class still
    /// inherits an equivalent member from a supertype; if so the old
    /// override merely collapsed into the inherited member, which is a
    /// change, not a removal.
    fn handle_removed(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        node: &ItemTree<'_>,
        new_parent: Option<ItemHandle<'_>>,
        filter: Option<Filter<'_>>,
    ) {
        let Some(item) = node.item else { return };
        if !emitted(filter, item) {
            return;
        }
        if matches!(item.kind(), ItemKind::Method | ItemKind::Field) {
            if let Some(new_class) = new_parent.filter(|p| p.kind() == ItemKind::Class) {
                if let Some(inherited) = find_inherited_member(new_class, item, filter) {
                    dispatch_compare(visitor, item, inherited);
                    self.compare_member_children(visitor, item, inherited, filter);
                    return;
                }
            }
        }
        dispatch_removed(visitor, item, new_parent);
    }

    /// An item with no counterpart in the old forest.
    ///
    /// Before reporting an addition, check whether the old side's class
    /// inherited an equivalent non-overridden member from a supertype; if
    /// so the new declaration is an override of existing API, which is a
    /// change, not an addition.
    fn handle_added(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        node: &ItemTree<'_>,
        old_parent: Option<ItemHandle<'_>>,
        filter: Option<Filter<'_>>,
    ) {
        let item = match node.item {
            Some(item) if emitted(filter, item) => item,
            _ => {
                // A non-emitted added subtree can still carry emitted
                // descendants (e.g. members of a structural class node).
                // Those have no old-side counterpart, so no parent threads
                // down for inheritance lookups.
                for child in &node.children {
                    self.handle_added(visitor, child, None, filter);
                }
                return;
            }
        };
        if matches!(item.kind(), ItemKind::Method | ItemKind::Field) {
            if let Some(old_class) = old_parent.filter(|p| p.kind() == ItemKind::Class) {
                if let Some(inherited) = find_inherited_member(old_class, item, filter) {
                    dispatch_compare(visitor, inherited, item);
                    self.compare_member_children(visitor, inherited, item, filter);
                    return;
                }
            }
        }
        dispatch_added(visitor, item);
        if self.visit_added_items_recursively {
            for child in &node.children {
                self.added_recursively(visitor, child, filter);
            }
        }
    }

    fn added_recursively(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        node: &ItemTree<'_>,
        filter: Option<Filter<'_>>,
    ) {
        if let Some(item) = node.item {
            if emitted(filter, item) {
                dispatch_added(visitor, item);
            }
        }
        for child in &node.children {
            self.added_recursively(visitor, child, filter);
        }
    }

    /// Recurses into the children of a reclassified member pair (parameters,
    /// for methods). Neither side's subtree exists in the current forest, so
    /// small ad hoc forests are built from the handles.
    fn compare_member_children(
        &self,
        visitor: &mut dyn ComparisonVisitor,
        old: ItemHandle<'_>,
        new: ItemHandle<'_>,
        filter: Option<Filter<'_>>,
    ) {
        let old_children = member_children(old, filter);
        let new_children = member_children(new, filter);
        self.compare_levels(
            visitor,
            &old_children,
            &new_children,
            Some(old),
            Some(new),
            filter,
        );
    }
}

fn member_children<'a>(
    item: ItemHandle<'a>,
    filter: Option<Filter<'_>>,
) -> Vec<ItemTree<'a>> {
    let mut children: Vec<ItemTree<'a>> = item
        .children()
        .filter(|c| crate::tree::accepted(filter, *c))
        .map(|c| ItemTree {
            item: Some(c),
            children: Vec::new(),
        })
        .collect();
    children.sort_by(|a, b| match (a.item, b.item) {
        (Some(a), Some(b)) => compare_items(a, b),
        _ => Ordering::Equal,
    });
    children
}

/// Finds a member equivalent to `target` that `class` inherits from a
/// supertype, searching the superclass chain and interface hierarchy.
/// Constructors are never inherited, so they are excluded before the call.
/// The member must pass the filter to count.
fn find_inherited_member<'a>(
    class: ItemHandle<'a>,
    target: ItemHandle<'_>,
    filter: Option<Filter<'_>>,
) -> Option<ItemHandle<'a>> {
    let mut supertypes: Vec<ItemHandle<'a>> = Vec::new();
    if let Some(sup) = class.super_class() {
        supertypes.push(sup);
    }
    supertypes.extend(class.interfaces());

    for supertype in supertypes {
        let found = supertype
            .children()
            .filter(|c| c.kind() == target.kind())
            .find(|c| same_item(*c, target) && crate::tree::accepted(filter, *c));
        if let Some(found) = found {
            return Some(found);
        }
        if let Some(found) = find_inherited_member(supertype, target, filter) {
            return Some(found);
        }
    }
    None
}

fn dispatch_compare(
    visitor: &mut dyn ComparisonVisitor,
    old: ItemHandle<'_>,
    new: ItemHandle<'_>,
) {
    visitor.compare_item(old, new);
    match old.kind() {
        ItemKind::Package => visitor.compare_package(old, new),
        ItemKind::Class => visitor.compare_class(old, new),
        ItemKind::Method => visitor.compare_method(old, new),
        ItemKind::Constructor => {
            if visitor.visit_constructors_as_methods() {
                visitor.compare_method(old, new);
            } else {
                visitor.compare_constructor(old, new);
            }
        }
        ItemKind::Field => visitor.compare_field(old, new),
        ItemKind::Parameter => visitor.compare_parameter(old, new),
        ItemKind::Property => visitor.compare_property(old, new),
        ItemKind::Annotation => {
            unreachable!("annotation items are attributes, not tree nodes")
        }
    }
}

fn dispatch_added(visitor: &mut dyn ComparisonVisitor, new: ItemHandle<'_>) {
    visitor.added_item(new);
    match new.kind() {
        ItemKind::Package => visitor.added_package(new),
        ItemKind::Class => visitor.added_class(new),
        ItemKind::Method => visitor.added_method(new),
        ItemKind::Constructor => {
            if visitor.visit_constructors_as_methods() {
                visitor.added_method(new);
            } else {
                visitor.added_constructor(new);
            }
        }
        ItemKind::Field => visitor.added_field(new),
        ItemKind::Parameter => visitor.added_parameter(new),
        ItemKind::Property => visitor.added_property(new),
        ItemKind::Annotation => {
            unreachable!("annotation items are attributes, not tree nodes")
        }
    }
}

fn dispatch_removed(
    visitor: &mut dyn ComparisonVisitor,
    old: ItemHandle<'_>,
    from: Option<ItemHandle<'_>>,
) {
    visitor.removed_item(old, from);
    match old.kind() {
        ItemKind::Package => visitor.removed_package(old, from),
        ItemKind::Class => visitor.removed_class(old, from),
        ItemKind::Method => visitor.removed_method(old, from),
        ItemKind::Constructor => {
            if visitor.visit_constructors_as_methods() {
                visitor.removed_method(old, from);
            } else {
                visitor.removed_constructor(old, from);
            }
        }
        ItemKind::Field => visitor.removed_field(old, from),
        ItemKind::Parameter => visitor.removed_parameter(old, from),
        ItemKind::Property => visitor.removed_property(old, from),
        ItemKind::Annotation => {
            unreachable!("annotation items are attributes, not tree nodes")
        }
    }
}
