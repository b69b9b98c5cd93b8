//! Structural differences between two runs of elements.
//!
//! A difference is two ordered lists of changes:
//! - removals, with offsets into the original elements;
//! - insertions, with offsets into the resulting elements.
//!
//! Applying one walks the original once, dropping removed offsets, then
//! interleaves the insertions at their final positions.

use alloc::vec::Vec;
use core::iter::Chain;
use core::slice;

/// One step of a [`CollectionDifference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    Insert { offset: usize, element: T },
    Remove { offset: usize, element: T },
}

impl<T> Change<T> {
    pub fn offset(&self) -> usize {
        match self {
            Change::Insert { offset, .. } | Change::Remove { offset, .. } => *offset,
        }
    }

    pub fn element(&self) -> &T {
        match self {
            Change::Insert { element, .. } | Change::Remove { element, .. } => element,
        }
    }

    fn invert(self) -> Self {
        match self {
            Change::Insert { offset, element } => Change::Remove { offset, element },
            Change::Remove { offset, element } => Change::Insert { offset, element },
        }
    }
}

/// Removals and insertions that turn one run of elements into another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDifference<T> {
    removals: Vec<Change<T>>,
    insertions: Vec<Change<T>>,
}

impl<T> CollectionDifference<T> {
    /// Collect `changes` into a difference.
    ///
    /// Returns `None` when two removals or two insertions share an offset.
    pub fn new<I>(changes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Change<T>>,
    {
        let (mut insertions, mut removals): (Vec<_>, Vec<_>) = changes
            .into_iter()
            .partition(|change| matches!(change, Change::Insert { .. }));
        removals.sort_by_key(Change::offset);
        insertions.sort_by_key(Change::offset);

        let unique = |changes: &[Change<T>]| {
            changes
                .windows(2)
                .all(|pair| pair[0].offset() < pair[1].offset())
        };
        if unique(&removals) && unique(&insertions) {
            Some(Self {
                removals,
                insertions,
            })
        } else {
            None
        }
    }

    /// Changes that turn `from` into `to`, treating elements as equal when
    /// `equivalent(from_element, to_element)` holds.
    ///
    /// The result has the fewest possible changes. Cost is O((n + m) D) for
    /// D changes, after the common prefix and suffix are set aside.
    pub fn between<F>(from: &[T], to: &[T], mut equivalent: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let prefix = from
            .iter()
            .zip(to)
            .take_while(|&(a, b)| equivalent(a, b))
            .count();
        let (from, to) = (&from[prefix..], &to[prefix..]);
        let suffix = from
            .iter()
            .rev()
            .zip(to.iter().rev())
            .take_while(|&(a, b)| equivalent(a, b))
            .count();
        let from = &from[..from.len() - suffix];
        let to = &to[..to.len() - suffix];

        let trace = edit_trace(from, to, &mut equivalent);

        let mut removals = Vec::new();
        let mut insertions = Vec::new();
        let (mut x, mut y) = (from.len() as isize, to.len() as isize);
        for (d, frontier) in trace.iter().enumerate().skip(1).rev() {
            let d = d as isize;
            let reach = |k: isize| frontier[(k + d) as usize] as isize;
            let k = x - y;
            let previous_k = if k == -d || (k != d && reach(k - 1) < reach(k + 1)) {
                k + 1
            } else {
                k - 1
            };
            let previous_x = reach(previous_k);
            let previous_y = previous_x - previous_k;
            // A downward step adds one more row than columns to the snake.
            if y - previous_y > x - previous_x {
                let offset = previous_y as usize;
                insertions.push(Change::Insert {
                    offset: prefix + offset,
                    element: to[offset].clone(),
                });
            } else {
                let offset = previous_x as usize;
                removals.push(Change::Remove {
                    offset: prefix + offset,
                    element: from[offset].clone(),
                });
            }
            x = previous_x;
            y = previous_y;
        }
        removals.reverse();
        insertions.reverse();
        Self {
            removals,
            insertions,
        }
    }

    pub fn removals(&self) -> &[Change<T>] {
        &self.removals
    }

    pub fn insertions(&self) -> &[Change<T>] {
        &self.insertions
    }

    pub fn len(&self) -> usize {
        self.removals.len() + self.insertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.insertions.is_empty()
    }

    /// Removals in ascending offset order, then insertions likewise.
    pub fn iter(&self) -> Chain<slice::Iter<'_, Change<T>>, slice::Iter<'_, Change<T>>> {
        self.removals.iter().chain(self.insertions.iter())
    }

    /// The difference that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            removals: self.insertions.into_iter().map(Change::invert).collect(),
            insertions: self.removals.into_iter().map(Change::invert).collect(),
        }
    }

    /// `base` with this difference applied, or `None` if an offset does not
    /// fit.
    pub fn apply_to(&self, base: &[T]) -> Option<Vec<T>>
    where
        T: Clone,
    {
        let mut removals = self.removals.iter().map(Change::offset).peekable();
        let mut kept = Vec::with_capacity(base.len());
        for (offset, element) in base.iter().enumerate() {
            if removals.peek() == Some(&offset) {
                removals.next();
            } else {
                kept.push(element.clone());
            }
        }
        if removals.next().is_some() {
            return None;
        }

        let mut kept = kept.into_iter();
        let mut insertions = self.insertions.iter().peekable();
        let mut result = Vec::with_capacity(base.len() + self.insertions.len());
        loop {
            if let Some(change) = insertions.next_if(|change| change.offset() == result.len()) {
                result.push(change.element().clone());
                continue;
            }
            match kept.next() {
                Some(element) => result.push(element),
                None => break,
            }
        }
        if insertions.next().is_some() {
            return None;
        }
        Some(result)
    }
}

/// Greedy forward search for the shortest edit script.
///
/// Entry `d` holds, for each diagonal `k` in `-d..=d`, the furthest `x`
/// reached with `d - 1` edits, indexed by `k + d`.
fn edit_trace<T, F>(from: &[T], to: &[T], equivalent: &mut F) -> Vec<Vec<usize>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (n, m) = (from.len() as isize, to.len() as isize);
    let max = from.len() + to.len();
    let mut furthest = alloc::vec![0usize; 2 * max + 2];
    let slot = |k: isize| (k + max as isize) as usize;
    let mut trace = Vec::new();

    for d in 0..=max {
        trace.push(furthest[max - d..=max + d].to_vec());
        let d = d as isize;
        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d || (k != d && furthest[slot(k - 1)] < furthest[slot(k + 1)]) {
                furthest[slot(k + 1)] as isize
            } else {
                furthest[slot(k - 1)] as isize + 1
            };
            let mut y = x - k;
            while x < n && y < m && equivalent(&from[x as usize], &to[y as usize]) {
                x += 1;
                y += 1;
            }
            furthest[slot(k)] = x as usize;
            if x >= n && y >= m {
                return trace;
            }
        }
    }
    trace
}

impl<'a, T> IntoIterator for &'a CollectionDifference<T> {
    type Item = &'a Change<T>;
    type IntoIter = Chain<slice::Iter<'a, Change<T>>, slice::Iter<'a, Change<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn remove<T>(offset: usize, element: T) -> Change<T> {
        Change::Remove { offset, element }
    }

    fn insert<T>(offset: usize, element: T) -> Change<T> {
        Change::Insert { offset, element }
    }

    fn diff<T: Clone + PartialEq>(from: &[T], to: &[T]) -> CollectionDifference<T> {
        CollectionDifference::between(from, to, |a, b| a == b)
    }

    #[test]
    fn test_between_finds_minimal_changes() {
        let diff = diff(&[1, 2, 3, 4], &[1, 3, 4, 5]);
        assert_eq!(diff.removals(), &[remove(1, 2)]);
        assert_eq!(diff.insertions(), &[insert(3, 5)]);
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn test_apply_round_trip() {
        let from = ['k', 'i', 't', 't', 'e', 'n'];
        let to = ['s', 'i', 't', 't', 'i', 'n', 'g'];
        let diff = diff(&from, &to);
        // "ittn" survives; everything else is removed or inserted.
        assert_eq!(diff.len(), 5);
        assert_eq!(diff.apply_to(&from), Some(to.to_vec()));
        assert_eq!(diff.inverse().apply_to(&to), Some(from.to_vec()));
    }

    #[test]
    fn test_large_runs_with_few_edits() {
        let from: Vec<u32> = (0..100_000).collect();
        let mut to = from.clone();
        to.remove(40_000);
        to.insert(70_000, 7);

        let diff = diff(&from, &to);
        assert_eq!(diff.removals(), &[remove(40_000, 40_000)]);
        assert_eq!(diff.insertions(), &[insert(70_000, 7)]);
        assert_eq!(diff.apply_to(&from), Some(to));
    }

    #[test]
    fn test_edits_at_both_ends() {
        let from: Vec<u32> = (0..50_000).collect();
        let to: Vec<u32> = (1..50_001).collect();

        let diff = diff(&from, &to);
        assert_eq!(diff.removals(), &[remove(0, 0)]);
        assert_eq!(diff.insertions(), &[insert(49_999, 50_000)]);
        assert_eq!(diff.apply_to(&from), Some(to));
    }

    #[test]
    fn test_disjoint_runs_replace_everything() {
        let replaced = diff(&[1, 2], &[3, 4, 5]);
        assert_eq!(replaced.removals().len(), 2);
        assert_eq!(replaced.insertions().len(), 3);
        assert_eq!(replaced.apply_to(&[1, 2]), Some(vec![3, 4, 5]));

        let empty: [i32; 0] = [];
        assert!(diff(&empty, &empty).is_empty());
        assert_eq!(diff(&empty, &[9]).insertions(), &[insert(0, 9)]);
    }

    #[test]
    fn test_identical_runs_have_empty_difference() {
        let diff = diff(&[1, 2, 3], &[1, 2, 3]);
        assert!(diff.is_empty());
        assert_eq!(diff.apply_to(&[1, 2, 3]), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_new_rejects_duplicate_offsets() {
        let changes = vec![remove(0, 'a'), remove(0, 'b')];
        assert!(CollectionDifference::new(changes).is_none());

        let changes = vec![insert(0, 'a'), remove(0, 'b')];
        assert!(CollectionDifference::new(changes).is_some());
    }

    #[test]
    fn test_apply_rejects_out_of_range_offsets() {
        let diff = CollectionDifference::new([remove(5, 0)]).unwrap();
        assert_eq!(diff.apply_to(&[1, 2, 3]), None);

        let diff = CollectionDifference::new([insert(9, 0)]).unwrap();
        assert_eq!(diff.apply_to(&[1, 2, 3]), None);
    }
}
