//! In-place element replacement.

use core::ops::Range;

use super::Collection;

/// A collection whose elements can be overwritten in place.
pub trait MutableCollection: Collection {
    /// Element at `position`, writable.
    fn at_mut(&mut self, position: Self::Index) -> &mut Self::Element;

    /// Exchange the elements at `i` and `j`.
    fn swap_at(&mut self, i: Self::Index, j: Self::Index);

    /// Store `value` at `position`, returning the element it replaced.
    fn set(&mut self, position: Self::Index, value: Self::Element) -> Self::Element {
        core::mem::replace(self.at_mut(position), value)
    }

    /// Overwrite every position in `bounds` with `values`, in order.
    ///
    /// `values` must yield exactly as many elements as `bounds` covers.
    fn assign_range<I>(&mut self, bounds: Range<Self::Index>, values: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut values = values.into_iter();
        let mut position = bounds.start;
        while position != bounds.end {
            let Some(value) = values.next() else {
                panic!("replacement has fewer elements than the range it replaces");
            };
            *self.at_mut(position.clone()) = value;
            self.form_index_after(&mut position);
        }
        assert!(
            values.next().is_none(),
            "replacement has more elements than the range it replaces"
        );
    }

    /// Run `body` over the elements as one mutable contiguous slice, or
    /// return `None` when the storage is not contiguous.
    fn with_contiguous_storage_mut<R, F>(&mut self, body: F) -> Option<R>
    where
        F: FnOnce(&mut [Self::Element]) -> R,
    {
        let _ = body;
        None
    }
}
