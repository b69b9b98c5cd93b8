//! # Layer 1: Base Capabilities
//!
//! What an inner container must be able to do before a host can forward to
//! it. Each trait refines the one before it:
//!
//! ```text
//! Sequence
//!    |
//! Collection ------------------+--------------------------+
//!    |                         |                          |
//! BidirectionalCollection   MutableCollection   RangeReplaceableCollection
//!    |                         |                          |
//! RandomAccessCollection       |                          |
//!    |                         |                          |
//!    +-------------------------+--------------------------+
//!                              |
//!                       ContiguousArray
//! ```
//!
//! Std containers are wired up in [`impls`].

pub mod bidirectional;
pub mod collection;
pub mod mutable;
pub mod random_access;
pub mod sequence;
pub mod slice;

#[cfg(feature = "alloc")]
pub mod array;
#[cfg(feature = "alloc")]
pub mod range_replaceable;

pub mod impls;

pub use bidirectional::BidirectionalCollection;
pub use collection::{Collection, Indices};
pub use mutable::MutableCollection;
pub use random_access::RandomAccessCollection;
pub use sequence::Sequence;
pub use slice::{Slice, SliceIter};

#[cfg(feature = "alloc")]
pub use array::ContiguousArray;
#[cfg(feature = "alloc")]
pub use range_replaceable::RangeReplaceableCollection;
