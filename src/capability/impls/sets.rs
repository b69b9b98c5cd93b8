//! Unordered and ordered sets traverse, but have no stable positions to
//! expose.

use alloc::collections::BTreeSet;

use crate::capability::Sequence;

impl<T> Sequence for BTreeSet<T> {
    type Element = T;

    type Iter<'a>
        = alloc::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> alloc::collections::btree_set::Iter<'_, T> {
        BTreeSet::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        BTreeSet::len(self)
    }
}

#[cfg(feature = "std")]
impl<T, S> Sequence for std::collections::HashSet<T, S> {
    type Element = T;

    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        std::collections::HashSet::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        std::collections::HashSet::len(self)
    }
}
