//! `Vec<T>`: the one container with every capability.

use alloc::vec::Vec;
use core::ops::Range;

use crate::capability::{
    BidirectionalCollection, Collection, ContiguousArray, MutableCollection,
    RandomAccessCollection, RangeReplaceableCollection, Sequence,
};

impl<T> Sequence for Vec<T> {
    type Element = T;

    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> core::slice::Iter<'_, T> {
        <[T]>::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        Vec::len(self)
    }

    fn with_contiguous_storage<R, F>(&self, body: F) -> Option<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        Some(body(Vec::as_slice(self)))
    }
}

impl<T> Collection for Vec<T> {
    type Index = usize;

    type SubSequence<'a>
        = &'a [T]
    where
        Self: 'a;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        Vec::len(self)
    }

    fn index_after(&self, i: usize) -> usize {
        <[T] as Collection>::index_after(self, i)
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn slice(&self, bounds: Range<usize>) -> &[T] {
        &self[bounds]
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn count(&self) -> usize {
        Vec::len(self)
    }

    fn first(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn index_offset(&self, i: usize, distance: isize) -> usize {
        <[T] as Collection>::index_offset(self, i, distance)
    }

    fn index_offset_limited(&self, i: usize, distance: isize, limit: usize) -> Option<usize> {
        <[T] as Collection>::index_offset_limited(self, i, distance, limit)
    }

    fn distance(&self, start: usize, end: usize) -> isize {
        <[T] as Collection>::distance(self, start, end)
    }
}

impl<T> BidirectionalCollection for Vec<T> {
    fn index_before(&self, i: usize) -> usize {
        <[T] as BidirectionalCollection>::index_before(self, i)
    }

    fn last(&self) -> Option<&T> {
        <[T]>::last(self)
    }
}

impl<T> RandomAccessCollection for Vec<T> {}

impl<T> MutableCollection for Vec<T> {
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
        Some(body(Vec::as_mut_slice(self)))
    }
}

impl<T> RangeReplaceableCollection for Vec<T> {
    fn replace_subrange<I>(&mut self, bounds: Range<usize>, new_elements: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.splice(bounds, new_elements).collect()
    }

    fn reserve_capacity(&mut self, minimum_capacity: usize) {
        let additional = minimum_capacity.saturating_sub(Vec::len(self));
        Vec::reserve(self, additional);
    }

    fn push(&mut self, element: T) {
        Vec::push(self, element);
    }

    fn append_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(elements);
    }

    fn insert(&mut self, i: usize, element: T) {
        Vec::insert(self, i, element);
    }

    fn remove(&mut self, i: usize) -> T {
        Vec::remove(self, i)
    }

    fn pop_last(&mut self) -> Option<Self::Element> {
        Vec::pop(self)
    }

    fn remove_all(&mut self, keeping_capacity: bool) {
        if keeping_capacity {
            Vec::clear(self);
        } else {
            *self = Vec::new();
        }
    }

    fn remove_all_where<F>(&mut self, mut should_remove: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(|element| !should_remove(element));
    }
}

impl<T> ContiguousArray for Vec<T> {
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}
