//! `[T]` and `[T; N]`.

use core::ops::Range;

use crate::capability::random_access::{offset_position, offset_position_limited, position_distance};
use crate::capability::{
    BidirectionalCollection, Collection, MutableCollection, RandomAccessCollection, Sequence,
};

// =============================================================================
// [T]
// =============================================================================

impl<T> Sequence for [T] {
    type Element = T;

    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> core::slice::Iter<'_, T> {
        <[T]>::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        self.len()
    }

    fn with_contiguous_storage<R, F>(&self, body: F) -> Option<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        Some(body(self))
    }
}

impl<T> Collection for [T] {
    type Index = usize;

    type SubSequence<'a>
        = &'a [T]
    where
        Self: 'a;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.len()
    }

    fn index_after(&self, i: usize) -> usize {
        offset_position(i, 1)
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn slice(&self, bounds: Range<usize>) -> &[T] {
        &self[bounds]
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn first(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn index_offset(&self, i: usize, distance: isize) -> usize {
        offset_position(i, distance)
    }

    fn index_offset_limited(&self, i: usize, distance: isize, limit: usize) -> Option<usize> {
        offset_position_limited(i, distance, limit)
    }

    fn distance(&self, start: usize, end: usize) -> isize {
        position_distance(start, end)
    }
}

impl<T> BidirectionalCollection for [T] {
    fn index_before(&self, i: usize) -> usize {
        offset_position(i, -1)
    }

    fn last(&self) -> Option<&T> {
        <[T]>::last(self)
    }
}

impl<T> RandomAccessCollection for [T] {}

impl<T> MutableCollection for [T] {
    fn at_mut(&mut self, position: usize) -> &mut T {
        &mut self[position]
    }

    fn swap_at(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }

    fn with_contiguous_storage_mut<R, F>(&mut self, body: F) -> Option<R>
    where
        F: FnOnce(&mut [T]) -> R,
    {
        Some(body(self))
    }
}

// =============================================================================
// [T; N]: everything goes through the unsized slice impl.
// =============================================================================

impl<T, const N: usize> Sequence for [T; N] {
    type Element = T;

    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> core::slice::Iter<'_, T> {
        <[T]>::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        N
    }

    fn with_contiguous_storage<R, F>(&self, body: F) -> Option<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        Some(body(self.as_slice()))
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Index = usize;

    type SubSequence<'a>
        = &'a [T]
    where
        Self: 'a;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        N
    }

    fn index_after(&self, i: usize) -> usize {
        offset_position(i, 1)
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn slice(&self, bounds: Range<usize>) -> &[T] {
        &self[bounds]
    }

    fn is_empty(&self) -> bool {
        N == 0
    }

    fn count(&self) -> usize {
        N
    }

    fn first(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn index_offset(&self, i: usize, distance: isize) -> usize {
        offset_position(i, distance)
    }

    fn index_offset_limited(&self, i: usize, distance: isize, limit: usize) -> Option<usize> {
        offset_position_limited(i, distance, limit)
    }

    fn distance(&self, start: usize, end: usize) -> isize {
        position_distance(start, end)
    }
}

impl<T, const N: usize> BidirectionalCollection for [T; N] {
    fn index_before(&self, i: usize) -> usize {
        offset_position(i, -1)
    }

    fn last(&self) -> Option<&T> {
        <[T]>::last(self)
    }
}

impl<T, const N: usize> RandomAccessCollection for [T; N] {}

impl<T, const N: usize> MutableCollection for [T; N] {
    fn at_mut(&mut self, position: usize) -> &mut T {
        &mut self[position]
    }

    fn swap_at(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }

    fn with_contiguous_storage_mut<R, F>(&mut self, body: F) -> Option<R>
    where
        F: FnOnce(&mut [T]) -> R,
    {
        Some(body(self.as_mut_slice()))
    }
}
