//! `VecDeque<T>`: random access over a ring buffer.
//!
//! Storage is contiguous only while the ring has not wrapped, so the
//! contiguous-storage hooks answer `None` once it has.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::Range;

use crate::capability::random_access::{offset_position, offset_position_limited, position_distance};
use crate::capability::{
    BidirectionalCollection, Collection, MutableCollection, RandomAccessCollection,
    RangeReplaceableCollection, Sequence, Slice,
};

impl<T> Sequence for VecDeque<T> {
    type Element = T;

    type Iter<'a>
        = alloc::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> alloc::collections::vec_deque::Iter<'_, T> {
        VecDeque::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        VecDeque::len(self)
    }

    fn with_contiguous_storage<R, F>(&self, body: F) -> Option<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        match self.as_slices() {
            (front, []) => Some(body(front)),
            _ => None,
        }
    }
}

impl<T> Collection for VecDeque<T> {
    type Index = usize;

    type SubSequence<'a>
        = Slice<'a, VecDeque<T>>
    where
        Self: 'a;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        VecDeque::len(self)
    }

    fn index_after(&self, i: usize) -> usize {
        offset_position(i, 1)
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn slice(&self, bounds: Range<usize>) -> Slice<'_, VecDeque<T>> {
        // Let the deque reject bad bounds with its own message.
        let _ = VecDeque::range(self, bounds.clone());
        Slice::new(self, bounds)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn count(&self) -> usize {
        VecDeque::len(self)
    }

    fn first(&self) -> Option<&T> {
        VecDeque::front(self)
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

impl<T> BidirectionalCollection for VecDeque<T> {
    fn index_before(&self, i: usize) -> usize {
        offset_position(i, -1)
    }

    fn last(&self) -> Option<&T> {
        VecDeque::back(self)
    }
}

impl<T> RandomAccessCollection for VecDeque<T> {}

impl<T> MutableCollection for VecDeque<T> {
    fn at_mut(&mut self, position: usize) -> &mut T {
        &mut self[position]
    }

    fn swap_at(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }

    fn with_contiguous_storage_mut<R, F>(&mut self, body: F) -> Option<R>
    where
        F: FnOnce(&mut [T]) -> R,
    {
        match self.as_mut_slices() {
            (front, []) => Some(body(front)),
            _ => None,
        }
    }
}

impl<T> RangeReplaceableCollection for VecDeque<T> {
    fn replace_subrange<I>(&mut self, bounds: Range<usize>, new_elements: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let removed = self.drain(bounds.clone()).collect();
        let mut tail = self.split_off(bounds.start);
        self.extend(new_elements);
        self.append(&mut tail);
        removed
    }

    fn reserve_capacity(&mut self, minimum_capacity: usize) {
        let additional = minimum_capacity.saturating_sub(VecDeque::len(self));
        VecDeque::reserve(self, additional);
    }

    fn push(&mut self, element: T) {
        self.push_back(element);
    }

    fn append_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(elements);
    }

    fn insert(&mut self, i: usize, element: T) {
        VecDeque::insert(self, i, element);
    }

    fn remove(&mut self, i: usize) -> T {
        let len = VecDeque::len(self);
        match VecDeque::remove(self, i) {
            Some(element) => element,
            None => panic!("removal index (is {i}) should be < len (is {len})"),
        }
    }

    fn pop_last(&mut self) -> Option<Self::Element> {
        self.pop_back()
    }

    fn remove_all(&mut self, keeping_capacity: bool) {
        if keeping_capacity {
            VecDeque::clear(self);
        } else {
            *self = VecDeque::new();
        }
    }

    fn remove_all_where<F>(&mut self, mut should_remove: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(|element| !should_remove(element));
    }
}
