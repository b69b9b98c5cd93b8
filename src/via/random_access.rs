//! Constant-time index arithmetic through the accessor.

use super::BidirectionalCollectionVia;
use crate::accessor::ReadVia;
use crate::capability::RandomAccessCollection;

/// Same operations as [`BidirectionalCollectionVia`]. Claiming this layer
/// records that the inner container does its index arithmetic in O(1), so
/// generic code can require it.
pub trait RandomAccessCollectionVia:
    BidirectionalCollectionVia + ReadVia<Inner: RandomAccessCollection>
{
}
