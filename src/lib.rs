#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashSet support, rand's StdRng)
// - alloc: Vec/VecDeque/LinkedList/BTreeSet, range-replaceable and array layers

//! # collection-via
//!
//! Container behaviour for composite types, forwarded through an accessor.
//!
//! A host type owns exactly one inner container and names the path to it.
//! Each forwarding layer it claims then hands every operation of that layer
//! to the inner container, unchanged: same order, same indices, same panics.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Accessors                                               |
//! |  - ReadVia, WriteVia (WriteVia: ReadVia), KeyPath, WritableKeyPath |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Base Capabilities                                       |
//! |  - Sequence .. ContiguousArray, impls for std containers          |
//! |  - CollectionDifference                                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Forwarding Layers                                       |
//! |  - SequenceVia .. ArrayVia, Equatable/Comparable refinements      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Declaration                                             |
//! |  - #[derive(Via)], via_layers!                                    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use collection_via::prelude::*;
//!
//! #[derive(Default, Via)]
//! #[via(array, equatable_array)]
//! struct Playlist {
//!     #[via(mut)]
//!     tracks: Vec<u32>,
//! }
//!
//! let mut playlist = Playlist::default();
//! playlist.push(7);
//! playlist.append_all([3, 9]);
//! assert_eq!(playlist.count(), 3);
//! assert!(playlist.contains(&9));
//! playlist.replace_subrange(0..1, [1, 2]);
//! assert_eq!(playlist[1], 2);
//! ```

// Allow `::collection_via` to work inside the crate itself
extern crate self as collection_via;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for via_layers!
pub use paste;

// =============================================================================
// Layer 0: Accessors
// =============================================================================
pub mod accessor;

// =============================================================================
// Layer 1: Base Capabilities
// =============================================================================
pub mod capability;

#[cfg(feature = "alloc")]
pub mod difference;

// =============================================================================
// Layer 2: Forwarding Layers
// =============================================================================
pub mod via;

// =============================================================================
// Layer 3: Declaration
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use accessor::{ElementOf, IndexOf, KeyPath, ReadVia, WritableKeyPath, WriteVia};
pub use capability::{
    BidirectionalCollection, Collection, Indices, MutableCollection, RandomAccessCollection,
    Sequence, Slice, SliceIter,
};
pub use via::{
    BidirectionalCollectionVia, CollectionVia, MutableCollectionVia, RandomAccessCollectionVia,
    SequenceVia,
};

#[cfg(feature = "alloc")]
pub use capability::{ContiguousArray, RangeReplaceableCollection};
#[cfg(feature = "alloc")]
pub use difference::{Change, CollectionDifference};
#[cfg(feature = "alloc")]
pub use via::{ArrayVia, ComparableArrayVia, EquatableArrayVia, RangeReplaceableCollectionVia};

// Re-export proc-macros
pub use macros::Via;

/// Everything needed to declare a host and call forwarded operations.
///
/// Base capability traits are not included; import them from
/// [`capability`] when implementing or calling a container directly.
pub mod prelude {
    pub use crate::accessor::{KeyPath, ReadVia, WritableKeyPath, WriteVia};
    pub use crate::via::{
        BidirectionalCollectionVia, CollectionVia, MutableCollectionVia,
        RandomAccessCollectionVia, SequenceVia,
    };
    #[cfg(feature = "alloc")]
    pub use crate::via::{
        ArrayVia, ComparableArrayVia, EquatableArrayVia, RangeReplaceableCollectionVia,
    };
    pub use macros::Via;
}
