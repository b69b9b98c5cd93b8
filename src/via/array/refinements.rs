//! Array operations gated on the element type.

use alloc::vec::Vec;

use super::ArrayVia;
use crate::accessor::{ElementOf, ReadVia};
use crate::capability::{ContiguousArray, Sequence};
use crate::difference::CollectionDifference;

/// Array operations for elements compared with `==`.
pub trait EquatableArrayVia: ArrayVia + ReadVia<Inner: Sequence<Element: PartialEq>> {
    fn contains(&self, element: &ElementOf<Self>) -> bool {
        self.via().as_slice().contains(element)
    }

    fn first_index_of(&self, element: &ElementOf<Self>) -> Option<usize> {
        self.via()
            .as_slice()
            .iter()
            .position(|candidate| candidate == element)
    }

    fn last_index_of(&self, element: &ElementOf<Self>) -> Option<usize> {
        self.via()
            .as_slice()
            .iter()
            .rposition(|candidate| candidate == element)
    }

    /// Runs between occurrences of `separator`. Empty runs are kept.
    fn split_on(&self, separator: &ElementOf<Self>) -> Vec<&[ElementOf<Self>]> {
        self.via()
            .as_slice()
            .split(|element| element == separator)
            .collect()
    }

    /// Like [`split_on`](Self::split_on), dropping the empty runs.
    fn split_nonempty_on(&self, separator: &ElementOf<Self>) -> Vec<&[ElementOf<Self>]> {
        self.via()
            .as_slice()
            .split(|element| element == separator)
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Changes that turn `other` into these elements.
    fn difference(&self, other: &[ElementOf<Self>]) -> CollectionDifference<ElementOf<Self>>
    where
        ElementOf<Self>: Clone,
    {
        self.via().difference_by(other, |a, b| a == b)
    }

    fn elements_equal(&self, other: &[ElementOf<Self>]) -> bool {
        self.via().as_slice() == other
    }

    fn starts_with(&self, prefix: &[ElementOf<Self>]) -> bool {
        self.via().as_slice().starts_with(prefix)
    }
}

/// Array operations for totally ordered elements.
pub trait ComparableArrayVia: ArrayVia + ReadVia<Inner: Sequence<Element: Ord>> {
    fn min_element(&self) -> Option<&ElementOf<Self>> {
        self.via().as_slice().iter().min()
    }

    /// The greatest element; the first of several equal ones.
    fn max_element(&self) -> Option<&ElementOf<Self>> {
        self.max_by(Ord::cmp)
    }

    /// Stable sort in ascending order.
    fn sort(&mut self) {
        self.via_mut().as_mut_slice().sort()
    }

    fn lexicographically_precedes(&self, other: &[ElementOf<Self>]) -> bool {
        self.via().as_slice() < other
    }
}
