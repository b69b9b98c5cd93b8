//! Collection layer: indices, subscripts and forward index arithmetic.

mod common;

use std::collections::{LinkedList, VecDeque};
use std::ops::Range;

use collection_via::capability::{Collection, Sequence};
use collection_via::prelude::*;
use common::{check_collection, wrap};

/// A container that can only walk forward, to exercise the provided
/// arithmetic on `Collection`.
#[derive(Debug, Clone, PartialEq)]
struct Forward(Vec<char>);

impl Sequence for Forward {
    type Element = char;

    type Iter<'a>
        = std::slice::Iter<'a, char>
    where
        Self: 'a;

    fn iter(&self) -> std::slice::Iter<'_, char> {
        self.0.as_slice().iter()
    }
}

impl Collection for Forward {
    type Index = usize;

    type SubSequence<'a>
        = &'a [char]
    where
        Self: 'a;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.0.len()
    }

    fn index_after(&self, i: usize) -> usize {
        assert!(i < self.0.len(), "can't advance past end");
        i + 1
    }

    fn at(&self, position: usize) -> &char {
        &self.0[position]
    }

    fn slice(&self, bounds: Range<usize>) -> &[char] {
        &self.0[bounds]
    }
}

#[derive(Via)]
#[via(collection)]
struct Word {
    #[via]
    letters: Forward,
}

fn word(text: &str) -> Word {
    Word {
        letters: Forward(text.chars().collect()),
    }
}

// =============================================================================
// Reads
// =============================================================================

#[test]
fn test_four_element_host() {
    let host = wrap(vec![1, 2, 3, 4]);
    assert_eq!(host.count(), 4);
    assert_eq!(host.first(), Some(&1));
    assert!(!host.is_empty());
    assert_eq!(host.start_index(), 0);
    assert_eq!(host.end_index(), 4);
    assert_eq!(host.indices().collect::<Vec<_>>(), [0, 1, 2, 3]);
}

#[test]
fn test_reads_match_every_std_container() {
    let items = [3, 1, 4, 1, 5];

    let vector = items.to_vec();
    check_collection(&wrap(vector.clone()), &vector);

    let deque: VecDeque<i32> = items.into_iter().collect();
    check_collection(&wrap(deque.clone()), &deque);

    let list: LinkedList<i32> = items.into_iter().collect();
    check_collection(&wrap(list.clone()), &list);

    check_collection(&wrap(items), &items);
}

#[test]
fn test_forward_only_host_matches_its_container() {
    let host = word("forward");
    check_collection(&host, &host.letters);
    assert_eq!(host.count(), 7);
    assert_eq!(*host.at(3), 'w');
}

#[test]
fn test_empty_host() {
    let host = wrap(Vec::<u8>::new());
    assert!(host.is_empty());
    assert_eq!(host.first(), None);
    assert_eq!(host.start_index(), host.end_index());
    check_collection(&host, &Vec::new());
}

#[test]
fn test_subscript_reads_the_same_element() {
    let host = wrap(vec!['a', 'b', 'c']);
    assert_eq!(host[1], 'b');
    assert_eq!(&host[2], host.at(2));
}

// =============================================================================
// Subsequences
// =============================================================================

#[test]
fn test_slice_of_contiguous_host_is_a_slice() {
    let host = wrap(vec![10, 20, 30, 40]);
    let middle: &[i32] = host.slice(1..3);
    assert_eq!(middle, [20, 30]);
}

#[test]
fn test_slice_of_deque_host_keeps_indices() {
    let host = wrap(VecDeque::from([10, 20, 30, 40]));
    let tail = host.slice(2..4);
    assert_eq!(tail.start_index(), 2);
    assert_eq!(*tail.at(3), 40);
    assert_eq!(Sequence::iter(&tail).copied().collect::<Vec<_>>(), [30, 40]);
}

// =============================================================================
// Index arithmetic
// =============================================================================

#[test]
fn test_offsets_and_distance() {
    let host = wrap(vec![1, 2, 3, 4, 5]);
    assert_eq!(host.index_after(0), 1);
    assert_eq!(host.index_offset(1, 3), 4);
    assert_eq!(host.distance(1, 4), 3);

    let mut i = 0;
    host.form_index_after(&mut i);
    host.form_index_offset(&mut i, 2);
    assert_eq!(i, 3);
}

#[test]
fn test_limited_offset_reports_no_result_instead_of_faulting() {
    let host = word("abcde");
    assert_eq!(host.index_offset_limited(0, 3, 5), Some(3));
    assert_eq!(host.index_offset_limited(0, 3, 3), Some(3));
    assert_eq!(host.index_offset_limited(0, 3, 2), None);

    let mut i = 1;
    assert!(!host.form_index_offset_limited(&mut i, 9, 4));
    assert_eq!(i, 4);
}

#[test]
fn test_limited_offset_matches_between_walk_and_formula() {
    let vector = wrap(vec![0; 6]);
    let list = wrap(LinkedList::from([0; 6]));
    for start in 0..=6 {
        for steps in -6..=6isize {
            for limit in 0..=6 {
                if !(0..=6).contains(&(start as isize + steps)) {
                    continue;
                }
                assert_eq!(
                    vector.index_offset_limited(start, steps, limit),
                    list.index_offset_limited(start, steps, limit),
                    "offset {start} by {steps} limited by {limit}"
                );
            }
        }
    }
}

// =============================================================================
// Faults
// =============================================================================

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_out_of_range_read_faults_like_the_container() {
    let host = wrap(vec![1, 2, 3, 4]);
    host.at(9);
}

#[test]
#[should_panic(expected = "Only bidirectional collections can be advanced by a negative amount")]
fn test_negative_offset_on_forward_only_host_faults() {
    word("abc").index_offset(2, -1);
}

#[test]
#[should_panic(expected = "can't advance past end")]
fn test_forward_only_container_fault_passes_through() {
    word("ab").index_after(2);
}
