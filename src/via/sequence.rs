//! Iteration through the accessor.

use crate::accessor::{ElementOf, ReadVia};
use crate::capability::Sequence;

/// Traversal of the inner container, in the inner container's order.
pub trait SequenceVia: ReadVia<Inner: Sequence> {
    #[inline]
    fn iter(&self) -> <Self::Inner as Sequence>::Iter<'_> {
        Sequence::iter(self.via())
    }

    #[inline]
    fn underestimated_count(&self) -> usize {
        Sequence::underestimated_count(self.via())
    }

    /// `None` when the inner storage is not contiguous.
    #[inline]
    fn with_contiguous_storage<R, F>(&self, body: F) -> Option<R>
    where
        F: FnOnce(&[ElementOf<Self>]) -> R,
    {
        Sequence::with_contiguous_storage(self.via(), body)
    }
}
