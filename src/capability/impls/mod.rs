//! Base capabilities for the standard containers.
//!
//! Every std container is indexed by `usize` positions. Inside these impls,
//! inherent methods are called by path (`Vec::len(self)`) because a
//! trait method of the same name would otherwise win method resolution and
//! recurse.

mod slice;

#[cfg(feature = "alloc")]
mod linked_list;
#[cfg(feature = "alloc")]
mod sets;
#[cfg(feature = "alloc")]
mod vec;
#[cfg(feature = "alloc")]
mod vec_deque;
