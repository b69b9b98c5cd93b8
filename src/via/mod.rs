//! # Layer 2: Forwarding Layers
//!
//! Each layer is a trait whose methods are all provided. A host claims a
//! layer with an empty `impl`; every method then relays through the
//! host's accessor to the inner container.
//!
//! ```text
//!                      ReadVia                     WriteVia
//!                         |                            |
//!                    SequenceVia                       |
//!                         |                            |
//!                   CollectionVia ---------------+-----+-----------+
//!                         |                      |                 |
//!            BidirectionalCollectionVia  MutableCollectionVia  RangeReplaceableCollectionVia
//!                         |                      |                 |
//!            RandomAccessCollectionVia           |                 |
//!                         |                      |                 |
//!                         +----------------------+-----------------+
//!                                                |
//!                                            ArrayVia
//!                                          /          \
//!                          EquatableArrayVia          ComparableArrayVia
//! ```
//!
//! Every method name belongs to exactly one layer, so a host claiming any
//! combination of layers never sees an ambiguous call.
//!
//! Layers that need a writable accessor name `WriteVia` as a supertrait. A
//! host that only implements `ReadVia` cannot claim them:
//!
//! ```compile_fail
//! use collection_via::prelude::*;
//!
//! struct Readings {
//!     values: Vec<i32>,
//! }
//!
//! impl ReadVia for Readings {
//!     type Inner = Vec<i32>;
//!     fn via(&self) -> &Vec<i32> {
//!         &self.values
//!     }
//! }
//!
//! impl SequenceVia for Readings {}
//! impl CollectionVia for Readings {}
//! impl MutableCollectionVia for Readings {}
//! ```

pub mod bidirectional;
pub mod collection;
pub mod mutable;
pub mod random_access;
pub mod sequence;

#[cfg(feature = "alloc")]
pub mod array;
#[cfg(feature = "alloc")]
pub mod range_replaceable;

pub use bidirectional::BidirectionalCollectionVia;
pub use collection::CollectionVia;
pub use mutable::MutableCollectionVia;
pub use random_access::RandomAccessCollectionVia;
pub use sequence::SequenceVia;

#[cfg(feature = "alloc")]
pub use array::{ArrayVia, ComparableArrayVia, EquatableArrayVia};
#[cfg(feature = "alloc")]
pub use range_replaceable::RangeReplaceableCollectionVia;
