//! `LinkedList<T>`: bidirectional, but every positional access walks.

use alloc::collections::LinkedList;
use alloc::vec::Vec;
use core::ops::Range;

use crate::capability::bidirectional::{walk_distance, walk_offset, walk_offset_limited};
use crate::capability::random_access::offset_position;
use crate::capability::{
    BidirectionalCollection, Collection, MutableCollection, RangeReplaceableCollection, Sequence,
    Slice,
};

fn out_of_bounds(position: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {position}")
}

impl<T> Sequence for LinkedList<T> {
    type Element = T;

    type Iter<'a>
        = alloc::collections::linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> alloc::collections::linked_list::Iter<'_, T> {
        LinkedList::iter(self)
    }

    fn underestimated_count(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Collection for LinkedList<T> {
    type Index = usize;

    type SubSequence<'a>
        = Slice<'a, LinkedList<T>>
    where
        Self: 'a;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        LinkedList::len(self)
    }

    fn index_after(&self, i: usize) -> usize {
        offset_position(i, 1)
    }

    fn at(&self, position: usize) -> &T {
        match LinkedList::iter(self).nth(position) {
            Some(element) => element,
            None => out_of_bounds(position, LinkedList::len(self)),
        }
    }

    fn slice(&self, bounds: Range<usize>) -> Slice<'_, LinkedList<T>> {
        let len = LinkedList::len(self);
        assert!(
            bounds.start <= bounds.end && bounds.end <= len,
            "range {bounds:?} out of bounds for list of length {len}"
        );
        Slice::new(self, bounds)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn count(&self) -> usize {
        LinkedList::len(self)
    }

    fn first(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    fn index_offset(&self, i: usize, distance: isize) -> usize {
        walk_offset(self, i, distance)
    }

    fn index_offset_limited(&self, i: usize, distance: isize, limit: usize) -> Option<usize> {
        walk_offset_limited(self, i, distance, limit)
    }

    fn distance(&self, start: usize, end: usize) -> isize {
        walk_distance(self, start, end)
    }
}

impl<T> BidirectionalCollection for LinkedList<T> {
    fn index_before(&self, i: usize) -> usize {
        offset_position(i, -1)
    }

    fn last(&self) -> Option<&T> {
        LinkedList::back(self)
    }
}

impl<T> MutableCollection for LinkedList<T> {
    fn at_mut(&mut self, position: usize) -> &mut T {
        let len = LinkedList::len(self);
        match LinkedList::iter_mut(self).nth(position) {
            Some(element) => element,
            None => out_of_bounds(position, len),
        }
    }

    fn swap_at(&mut self, i: usize, j: usize) {
        let (low, high) = if i <= j { (i, j) } else { (j, i) };
        let len = LinkedList::len(self);
        if high >= len {
            out_of_bounds(high, len);
        }
        if low == high {
            return;
        }
        let mut nodes = LinkedList::iter_mut(self);
        if let (Some(a), Some(b)) = (nodes.nth(low), nodes.nth(high - low - 1)) {
            core::mem::swap(a, b);
        }
    }
}

impl<T> RangeReplaceableCollection for LinkedList<T> {
    fn replace_subrange<I>(&mut self, bounds: Range<usize>, new_elements: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let len = LinkedList::len(self);
        assert!(
            bounds.start <= bounds.end && bounds.end <= len,
            "range {bounds:?} out of bounds for list of length {len}"
        );
        let mut tail = self.split_off(bounds.start);
        let removed = (bounds.start..bounds.end)
            .filter_map(|_| tail.pop_front())
            .collect();
        self.extend(new_elements);
        self.append(&mut tail);
        removed
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

    fn remove_first(&mut self) -> T {
        match self.pop_front() {
            Some(element) => element,
            None => panic!("Can't remove first element from an empty collection"),
        }
    }

    fn pop_last(&mut self) -> Option<Self::Element> {
        self.pop_back()
    }

    fn remove_all(&mut self, _keeping_capacity: bool) {
        LinkedList::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[i32]) -> LinkedList<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_walking_offsets_in_both_directions() {
        let l = list(&[1, 2, 3, 4, 5]);
        assert_eq!(l.index_offset(1, 3), 4);
        assert_eq!(l.index_offset(4, -4), 0);
        assert_eq!(l.index_offset_limited(0, 4, 2), None);
        assert_eq!(l.index_offset_limited(4, -2, 2), Some(2));
        assert_eq!(l.distance(4, 1), -3);
    }

    #[test]
    fn test_swap_and_replace() {
        let mut l = list(&[1, 2, 3, 4]);
        l.swap_at(3, 0);
        assert_eq!(l, list(&[4, 2, 3, 1]));

        let removed = l.replace_subrange(1..3, [9]);
        assert_eq!(removed, [2, 3]);
        assert_eq!(l, list(&[4, 9, 1]));
    }

    #[test]
    fn test_pop_last_takes_from_back() {
        let mut l = list(&[1, 2]);
        assert_eq!(l.pop_last(), Some(2));
        assert_eq!(l, list(&[1]));
        assert_eq!(LinkedList::<i32>::new().pop_last(), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_at_past_end_faults() {
        list(&[1]).at(1);
    }
}
