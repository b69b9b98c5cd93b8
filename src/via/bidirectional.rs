//! Backward stepping through the accessor.

use super::CollectionVia;
use crate::accessor::{ElementOf, IndexOf, ReadVia};
use crate::capability::BidirectionalCollection;

pub trait BidirectionalCollectionVia: CollectionVia + ReadVia<Inner: BidirectionalCollection> {
    #[inline]
    fn index_before(&self, i: IndexOf<Self>) -> IndexOf<Self> {
        self.via().index_before(i)
    }

    #[inline]
    fn form_index_before(&self, i: &mut IndexOf<Self>) {
        self.via().form_index_before(i)
    }

    #[inline]
    fn last(&self) -> Option<&ElementOf<Self>> {
        self.via().last()
    }
}
