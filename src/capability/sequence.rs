//! Single-pass traversal.

/// A container whose elements can be traversed in a fixed order.
pub trait Sequence {
    type Element;

    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Borrowing iterator over the elements, in container order.
    fn iter(&self) -> Self::Iter<'_>;

    /// A count that never exceeds the number of elements and is cheap to
    /// compute. Zero unless the container knows better.
    fn underestimated_count(&self) -> usize {
        0
    }

    /// Run `body` over the elements as one contiguous slice.
    ///
    /// Returns `None` without calling `body` when the storage is not
    /// contiguous.
    fn with_contiguous_storage<R, F>(&self, body: F) -> Option<R>
    where
        F: FnOnce(&[Self::Element]) -> R,
    {
        let _ = body;
        None
    }
}
