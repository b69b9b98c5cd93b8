//! Shared hosts and differential checks for the forwarding tests.
//!
//! Every `check_*` runs the reads of one layer twice, once through a host
//! and once on a standalone copy of its inner container, and asserts the
//! answers are identical.

#![allow(dead_code)]

use std::fmt::Debug;
use std::ops::Range;

use collection_via::capability::{
    BidirectionalCollection, Collection, MutableCollection, RangeReplaceableCollection, Sequence,
};
use collection_via::prelude::*;
use collection_via::{ElementOf, IndexOf};

/// Host that claims every layer its inner container can support.
#[derive(Debug, Default, Clone, PartialEq, Via)]
#[via(array, equatable_array, comparable_array)]
pub struct Wrapper<C> {
    #[via(mut)]
    pub inner: C,
}

pub fn wrap<C>(inner: C) -> Wrapper<C> {
    Wrapper { inner }
}

// =============================================================================
// Read checks
// =============================================================================

pub fn check_sequence<H>(host: &H, standalone: &H::Inner)
where
    H: SequenceVia,
    ElementOf<H>: PartialEq + Debug,
{
    let forwarded: Vec<&ElementOf<H>> = SequenceVia::iter(host).collect();
    let direct: Vec<&ElementOf<H>> = Sequence::iter(standalone).collect();
    assert_eq!(forwarded, direct, "iteration order");
    assert_eq!(
        host.underestimated_count(),
        standalone.underestimated_count()
    );
    assert_eq!(
        host.with_contiguous_storage(|elements| elements.len()),
        standalone.with_contiguous_storage(|elements| elements.len())
    );
}

pub fn check_collection<H>(host: &H, standalone: &H::Inner)
where
    H: CollectionVia,
    ElementOf<H>: PartialEq + Debug,
{
    check_sequence(host, standalone);

    assert_eq!(host.start_index(), standalone.start_index());
    assert_eq!(host.end_index(), standalone.end_index());
    assert_eq!(host.count(), standalone.count());
    assert_eq!(host.is_empty(), standalone.is_empty());
    assert_eq!(host.first(), standalone.first());

    let indices: Vec<IndexOf<H>> = standalone.indices().collect();
    assert_eq!(host.indices().collect::<Vec<_>>(), indices);
    for i in &indices {
        assert_eq!(host.at(i.clone()), standalone.at(i.clone()));
        assert_eq!(
            host.index_after(i.clone()),
            standalone.index_after(i.clone())
        );
    }

    let mut positions = indices;
    positions.push(standalone.end_index());
    for (n, i) in positions.iter().enumerate() {
        for (m, j) in positions.iter().enumerate().skip(n) {
            let steps = (m - n) as isize;
            assert_eq!(
                host.distance(i.clone(), j.clone()),
                standalone.distance(i.clone(), j.clone())
            );
            assert_eq!(
                host.index_offset(i.clone(), steps),
                standalone.index_offset(i.clone(), steps)
            );
            for limit in &positions {
                assert_eq!(
                    host.index_offset_limited(i.clone(), steps, limit.clone()),
                    standalone.index_offset_limited(i.clone(), steps, limit.clone()),
                    "offset {i:?} by {steps} limited by {limit:?}"
                );
            }
        }
    }
}

pub fn check_bidirectional<H>(host: &H, standalone: &H::Inner)
where
    H: BidirectionalCollectionVia,
    ElementOf<H>: PartialEq + Debug,
{
    check_collection(host, standalone);

    assert_eq!(host.last(), standalone.last());

    let mut positions: Vec<IndexOf<H>> = standalone.indices().collect();
    positions.push(standalone.end_index());
    for (n, i) in positions.iter().enumerate().skip(1) {
        assert_eq!(
            host.index_before(i.clone()),
            standalone.index_before(i.clone())
        );
        for (m, j) in positions.iter().enumerate().take(n + 1) {
            let steps = m as isize - n as isize;
            assert_eq!(
                host.index_offset(i.clone(), steps),
                standalone.index_offset(i.clone(), steps)
            );
            assert_eq!(
                host.distance(i.clone(), j.clone()),
                standalone.distance(i.clone(), j.clone())
            );
            for limit in &positions {
                assert_eq!(
                    host.index_offset_limited(i.clone(), steps, limit.clone()),
                    standalone.index_offset_limited(i.clone(), steps, limit.clone()),
                    "offset {i:?} by {steps} limited by {limit:?}"
                );
            }
        }
    }
}

// =============================================================================
// Write checks
// =============================================================================

/// `set` on both sides, then every read again.
pub fn check_set<H>(
    host: &mut H,
    standalone: &mut H::Inner,
    position: IndexOf<H>,
    value: ElementOf<H>,
) where
    H: MutableCollectionVia,
    ElementOf<H>: PartialEq + Debug + Clone,
{
    let replaced = host.set(position.clone(), value.clone());
    assert_eq!(replaced, standalone.set(position.clone(), value.clone()));
    assert_eq!(host.at(position), &value);
    check_collection(&*host, &*standalone);
}

/// `replace_subrange` on both sides, then every read again.
pub fn check_replace<H, I>(
    host: &mut H,
    standalone: &mut H::Inner,
    bounds: Range<IndexOf<H>>,
    replacement: I,
) where
    H: RangeReplaceableCollectionVia,
    I: IntoIterator<Item = ElementOf<H>> + Clone,
    ElementOf<H>: PartialEq + Debug,
{
    let before = host.count();
    let removed = host.replace_subrange(bounds.clone(), replacement.clone());
    assert_eq!(
        removed,
        standalone.replace_subrange(bounds, replacement.clone())
    );
    let added = replacement.into_iter().count();
    assert_eq!(host.count(), before - removed.len() + added);
    check_collection(&*host, &*standalone);
}
