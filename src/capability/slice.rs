//! `Slice`: a borrowed subrange that keeps its base's indices.

use core::fmt;
use core::ops::Range;

use super::{BidirectionalCollection, Collection, RandomAccessCollection, Sequence};

/// Elements of `base` within `bounds`, addressed by the base's own indices.
pub struct Slice<'a, C: Collection + ?Sized> {
    base: &'a C,
    bounds: Range<C::Index>,
}

impl<'a, C: Collection + ?Sized> Slice<'a, C> {
    pub fn new(base: &'a C, bounds: Range<C::Index>) -> Self {
        Self { base, bounds }
    }

    pub fn base(&self) -> &'a C {
        self.base
    }

    pub fn bounds(&self) -> Range<C::Index> {
        self.bounds.clone()
    }
}

impl<C: Collection + ?Sized> Clone for Slice<'_, C> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            bounds: self.bounds.clone(),
        }
    }
}

impl<C> fmt::Debug for Slice<'_, C>
where
    C: Collection + ?Sized,
    C::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, C: Collection + ?Sized> Sequence for Slice<'s, C> {
    type Element = C::Element;

    type Iter<'a>
        = SliceIter<'a, C>
    where
        Self: 'a;

    fn iter(&self) -> SliceIter<'_, C> {
        SliceIter {
            base: self.base,
            front: self.bounds.start.clone(),
            back: self.bounds.end.clone(),
        }
    }

    fn underestimated_count(&self) -> usize {
        self.count()
    }
}

impl<'s, C: Collection + ?Sized> Collection for Slice<'s, C> {
    type Index = C::Index;

    type SubSequence<'a>
        = Slice<'a, C>
    where
        Self: 'a;

    fn start_index(&self) -> C::Index {
        self.bounds.start.clone()
    }

    fn end_index(&self) -> C::Index {
        self.bounds.end.clone()
    }

    fn index_after(&self, i: C::Index) -> C::Index {
        self.base.index_after(i)
    }

    fn at(&self, position: C::Index) -> &C::Element {
        self.base.at(position)
    }

    fn slice(&self, bounds: Range<C::Index>) -> Slice<'_, C> {
        assert!(
            self.bounds.start <= bounds.start && bounds.end <= self.bounds.end,
            "slice bounds {:?} outside of {:?}",
            bounds,
            self.bounds
        );
        Slice::new(self.base, bounds)
    }

    fn index_offset(&self, i: C::Index, distance: isize) -> C::Index {
        self.base.index_offset(i, distance)
    }

    fn index_offset_limited(
        &self,
        i: C::Index,
        distance: isize,
        limit: C::Index,
    ) -> Option<C::Index> {
        self.base.index_offset_limited(i, distance, limit)
    }

    fn distance(&self, start: C::Index, end: C::Index) -> isize {
        self.base.distance(start, end)
    }
}

impl<C: BidirectionalCollection + ?Sized> BidirectionalCollection for Slice<'_, C> {
    fn index_before(&self, i: C::Index) -> C::Index {
        self.base.index_before(i)
    }
}

impl<C: RandomAccessCollection + ?Sized> RandomAccessCollection for Slice<'_, C> {}

/// Iterator over the elements of a [`Slice`].
pub struct SliceIter<'a, C: Collection + ?Sized> {
    base: &'a C,
    front: C::Index,
    back: C::Index,
}

impl<'a, C: Collection + ?Sized> Iterator for SliceIter<'a, C> {
    type Item = &'a C::Element;

    fn next(&mut self) -> Option<&'a C::Element> {
        if self.front == self.back {
            return None;
        }
        let element = self.base.at(self.front.clone());
        self.base.form_index_after(&mut self.front);
        Some(element)
    }
}

impl<'a, C: BidirectionalCollection + ?Sized> DoubleEndedIterator for SliceIter<'a, C> {
    fn next_back(&mut self) -> Option<&'a C::Element> {
        if self.front == self.back {
            return None;
        }
        self.base.form_index_before(&mut self.back);
        Some(self.base.at(self.back.clone()))
    }
}
