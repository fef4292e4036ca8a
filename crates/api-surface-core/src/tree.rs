//! Ordered forest construction for comparison.
//!
//! [`ItemTree`] is an ephemeral wrapper built fresh for each comparison and
//! discarded afterward. The forest mirrors the codebase structure but is
//! re-sorted at every level by the canonical ordering, so alignment does not
//! depend on source declaration order.

use std::cmp::Ordering;

use tracing::debug;

use crate::model::{Codebase, ItemHandle, ItemKind};
use crate::ordering::compare_items;

/// Visibility predicate injected by the caller.
///
/// Decides which items are considered for a given purpose; `None` means the
/// codebase is taken as-is (e.g. already pre-filtered upstream).
pub type Filter<'f> = &'f dyn Fn(ItemHandle<'_>) -> bool;

/// One node of the comparison forest.
///
/// `item` is `None` only at the synthetic root. Children are kept sorted by
/// the canonical ordering.
#[derive(Debug)]
pub struct ItemTree<'a> {
    /// The wrapped item, absent only at the root.
    pub item: Option<ItemHandle<'a>>,
    /// Sorted child subtrees.
    pub children: Vec<ItemTree<'a>>,
}

impl<'a> ItemTree<'a> {
    fn new(item: Option<ItemHandle<'a>>) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }
}

/// Whether an item passes the filter, or the filter is absent.
pub(crate) fn accepted(filter: Option<Filter<'_>>, item: ItemHandle<'_>) -> bool {
    filter.map_or(true, |f| f(item))
}

/// Whether a matched or unmatched node should surface as an event.
pub(crate) fn emitted(filter: Option<Filter<'_>>, item: ItemHandle<'_>) -> bool {
    item.emit() && accepted(filter, item)
}

/// Builds the ordered comparison forest for one or more codebases.
///
/// Traversal follows source order; classes are always included structurally
/// so the tree shape stays stable even when the filter rejects them, while
/// members the filter rejects are left out entirely. Every level is then
/// re-sorted, and when more than one codebase contributed, equal siblings
/// are merged (see [`merge_duplicates`] for the tie-break policy).
#[must_use]
pub fn build_forest<'a>(codebases: &[&'a Codebase], filter: Option<Filter<'_>>) -> ItemTree<'a> {
    let mut root = ItemTree::new(None);
    for codebase in codebases {
        debug!(codebase = codebase.description(), "building comparison tree");
        let filter = if codebase.is_pre_filtered() { None } else { filter };
        for package in codebase.packages() {
            root.children.push(build_subtree(package, filter));
        }
    }
    sort_forest(&mut root.children);
    if codebases.len() > 1 {
        merge_duplicates(&mut root.children);
    }
    root
}

fn build_subtree<'a>(item: ItemHandle<'a>, filter: Option<Filter<'_>>) -> ItemTree<'a> {
    let mut node = ItemTree::new(Some(item));
    for child in item.children() {
        // Containing classes keep their structural slot no matter what the
        // filter says; their own emit flag governs event dispatch later.
        let structural = matches!(child.kind(), ItemKind::Class | ItemKind::Package);
        if structural || accepted(filter, child) {
            node.children.push(build_subtree(child, filter));
        }
    }
    node
}

fn sort_forest(children: &mut Vec<ItemTree<'_>>) {
    // Stable sort: equal siblings keep their encounter order, which the
    // duplicate tie-break below depends on.
    children.sort_by(|a, b| compare_nodes(a, b));
    for child in children.iter_mut() {
        sort_forest(&mut child.children);
    }
}

fn compare_nodes(a: &ItemTree<'_>, b: &ItemTree<'_>) -> Ordering {
    match (a.item, b.item) {
        (Some(a), Some(b)) => compare_items(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Collapses sorted siblings that compare equal.
///
/// Two tie-breaks apply in sequence: if exactly one of the pair is emitted,
/// the emitted node survives and absorbs the other's children; when both or
/// neither are emitted, the first-encountered node survives. Absorbed child
/// lists are re-sorted and merged recursively.
fn merge_duplicates(children: &mut Vec<ItemTree<'_>>) {
    let mut merged: Vec<ItemTree<'_>> = Vec::with_capacity(children.len());
    for node in children.drain(..) {
        match merged.last_mut() {
            Some(prev) if compare_nodes(prev, &node) == Ordering::Equal => {
                let prev_emitted = prev.item.is_some_and(|i| i.emit());
                let node_emitted = node.item.is_some_and(|i| i.emit());
                if node_emitted && !prev_emitted {
                    // The later copy is the emitted one: it survives and
                    // absorbs the children collected so far.
                    let mut node = node;
                    let absorbed = std::mem::take(&mut prev.children);
                    node.children.extend(absorbed);
                    *prev = node;
                } else {
                    prev.children.extend(node.children);
                }
                prev.children.sort_by(|a, b| compare_nodes(a, b));
            }
            _ => merged.push(node),
        }
    }
    for node in merged.iter_mut() {
        merge_duplicates(&mut node.children);
    }
    *children = merged;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodebaseBuilder, TypeItem};

    fn names(children: &[ItemTree<'_>]) -> Vec<String> {
        children
            .iter()
            .map(|c| c.item.map(|i| i.name().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn forest_is_sorted_independent_of_declaration_order() {
        let mut cb = CodebaseBuilder::new("a");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Foo");
        cb.field(cls, "zebra", TypeItem::new("int"));
        cb.method(cls, "alpha", TypeItem::void());
        cb.constructor(cls);
        let codebase = cb.build();

        let forest = build_forest(&[&codebase], None);
        let class_node = &forest.children[0].children[0];
        // constructor < method < field by kind rank
        assert_eq!(names(&class_node.children), vec!["Foo", "alpha", "zebra"]);
    }

    #[test]
    fn filtered_member_is_excluded_but_class_stays_structural() {
        let mut cb = CodebaseBuilder::new("a");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Foo");
        cb.set_hidden(cls, true);
        cb.method(cls, "bar", TypeItem::void());
        let codebase = cb.build();

        let reject_methods = |i: ItemHandle<'_>| i.kind() != ItemKind::Method;
        let forest = build_forest(&[&codebase], Some(&reject_methods));
        let pkg_node = &forest.children[0];
        // the hidden class keeps its structural slot
        assert_eq!(names(&pkg_node.children), vec!["Foo"]);
        // the filtered method is gone entirely
        assert!(pkg_node.children[0].children.is_empty());
    }

    #[test]
    fn merge_prefers_emitted_copy_and_unions_children() {
        // Codebase "a" declares pkg.Foo.bar() but does not emit the class;
        // codebase "b" declares an emitted pkg.Foo with baz().
        let mut a = CodebaseBuilder::new("a");
        let pkg = a.package("pkg");
        let cls = a.class(pkg, "Foo");
        a.set_emit(cls, false);
        a.method(cls, "bar", TypeItem::void());
        let a = a.build();

        let mut b = CodebaseBuilder::new("b");
        let pkg = b.package("pkg");
        let cls = b.class(pkg, "Foo");
        b.method(cls, "baz", TypeItem::void());
        let b = b.build();

        let forest = build_forest(&[&a, &b], None);
        let pkg_node = &forest.children[0];
        assert_eq!(pkg_node.children.len(), 1, "duplicates must merge");
        let foo = &pkg_node.children[0];
        assert!(foo.item.is_some_and(|i| i.emit()), "emitted copy survives");
        assert_eq!(names(&foo.children), vec!["bar", "baz"]);
    }

    #[test]
    fn merge_with_equal_emit_keeps_first_encountered() {
        let mut a = CodebaseBuilder::new("first");
        let pkg = a.package("pkg");
        a.class(pkg, "Foo");
        let a = a.build();

        let mut b = CodebaseBuilder::new("second");
        let pkg = b.package("pkg");
        b.class(pkg, "Foo");
        let b = b.build();

        let forest = build_forest(&[&a, &b], None);
        let foo = &forest.children[0].children[0];
        let survivor = foo.item.map(|i| i.codebase().description().to_string());
        assert_eq!(survivor.as_deref(), Some("first"));
    }

    #[test]
    fn single_codebase_never_merges() {
        let mut cb = CodebaseBuilder::new("a");
        let p1 = cb.package("pkg");
        cb.class(p1, "Foo");
        let codebase = cb.build();

        let forest = build_forest(&[&codebase], None);
        assert_eq!(forest.children.len(), 1);
        assert_eq!(forest.children[0].children.len(), 1);
    }
}
