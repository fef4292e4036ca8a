//! The canonical sibling ordering.
//!
//! One total order serves both purposes the engine needs: sorting sibling
//! lists before alignment, and deciding "are these the same API element"
//! during the merge walk. Keeping a single comparator is load-bearing; two
//! drifting equality notions would silently break the alignment.

use std::cmp::Ordering;

use crate::model::{ItemHandle, ItemKind};

/// Compares two sibling items under the canonical total order.
///
/// Rank by kind, then by name; methods and constructors additionally break
/// ties by parameter count and per-parameter erased type, with varargs/array
/// and legacy-coroutine-package equivalence folded into the erasure.
/// Parameters order by position. Works across codebases.
#[must_use]
pub fn compare_items(a: ItemHandle<'_>, b: ItemHandle<'_>) -> Ordering {
    let by_rank = a.kind().rank().cmp(&b.kind().rank());
    if by_rank != Ordering::Equal {
        return by_rank;
    }
    if a.kind() == ItemKind::Parameter {
        return a
            .parameter_index()
            .cmp(&b.parameter_index())
            .then_with(|| a.name().cmp(b.name()));
    }
    let by_name = a.name().cmp(b.name());
    if by_name != Ordering::Equal {
        return by_name;
    }
    match a.kind() {
        ItemKind::Method | ItemKind::Constructor => compare_signatures(a, b),
        _ => Ordering::Equal,
    }
}

/// Whether two items are the same API element under the canonical order.
#[must_use]
pub fn same_item(a: ItemHandle<'_>, b: ItemHandle<'_>) -> bool {
    compare_items(a, b) == Ordering::Equal
}

fn compare_signatures(a: ItemHandle<'_>, b: ItemHandle<'_>) -> Ordering {
    let params_a: Vec<String> = erased_parameters(a);
    let params_b: Vec<String> = erased_parameters(b);
    params_a
        .len()
        .cmp(&params_b.len())
        .then_with(|| params_a.cmp(&params_b))
}

fn erased_parameters(method: ItemHandle<'_>) -> Vec<String> {
    method
        .parameters()
        .map(|p| {
            p.item_type()
                .map(crate::model::TypeItem::erased_signature)
                .unwrap_or_default()
        })
        .collect()
}
