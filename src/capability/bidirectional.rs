//! Backward traversal.
//!
//! The free functions here are index arithmetic by walking, in both
//! directions. Bidirectional containers without O(1) arithmetic call them
//! from their `Collection` impl so negative offsets and distances work.

use super::Collection;

/// A collection that can also step backward.
pub trait BidirectionalCollection: Collection {
    /// Position immediately before `i`. `i` must be greater than
    /// `start_index()`.
    fn index_before(&self, i: Self::Index) -> Self::Index;

    fn form_index_before(&self, i: &mut Self::Index) {
        *i = self.index_before(i.clone());
    }

    fn last(&self) -> Option<&Self::Element> {
        if self.is_empty() {
            None
        } else {
            Some(self.at(self.index_before(self.end_index())))
        }
    }
}

/// Offset `i` by `distance` steps in either direction.
pub fn walk_offset<C>(collection: &C, i: C::Index, distance: isize) -> C::Index
where
    C: BidirectionalCollection + ?Sized,
{
    let mut i = i;
    if distance >= 0 {
        for _ in 0..distance {
            collection.form_index_after(&mut i);
        }
    } else {
        for _ in distance..0 {
            collection.form_index_before(&mut i);
        }
    }
    i
}

/// Offset `i` by `distance` steps in either direction, giving up with
/// `None` if `limit` is reached before the last step.
pub fn walk_offset_limited<C>(
    collection: &C,
    i: C::Index,
    distance: isize,
    limit: C::Index,
) -> Option<C::Index>
where
    C: BidirectionalCollection + ?Sized,
{
    let mut i = i;
    if distance >= 0 {
        for _ in 0..distance {
            if i == limit {
                return None;
            }
            collection.form_index_after(&mut i);
        }
    } else {
        for _ in distance..0 {
            if i == limit {
                return None;
            }
            collection.form_index_before(&mut i);
        }
    }
    Some(i)
}

/// Signed number of steps from `start` to `end`.
pub fn walk_distance<C>(collection: &C, start: C::Index, end: C::Index) -> isize
where
    C: BidirectionalCollection + ?Sized,
{
    let mut count = 0;
    if start <= end {
        let mut i = start;
        while i != end {
            collection.form_index_after(&mut i);
            count += 1;
        }
    } else {
        let mut i = start;
        while i != end {
            collection.form_index_before(&mut i);
            count -= 1;
        }
    }
    count
}
