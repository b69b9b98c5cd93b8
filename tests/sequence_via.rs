//! Sequence layer: iteration order and counts come from the inner container.

mod common;

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use collection_via::prelude::*;
use common::{check_sequence, wrap};

#[derive(Via)]
#[via(sequence)]
struct Tags {
    #[via]
    set: BTreeSet<&'static str>,
}

#[derive(Via)]
#[via(sequence)]
struct Seen(#[via] HashSet<u64>);

// =============================================================================
// Order
// =============================================================================

#[test]
fn test_iteration_matches_inner_order() {
    let host = wrap(vec![1, 2, 3, 4]);
    assert_eq!(host.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    check_sequence(&host, &vec![1, 2, 3, 4]);
}

#[test]
fn test_ordered_set_host_iterates_sorted() {
    let tags = Tags {
        set: ["zeta", "alpha", "mu"].into_iter().collect(),
    };
    let sorted: Vec<&str> = tags.iter().copied().collect();
    assert_eq!(sorted, ["alpha", "mu", "zeta"]);
    check_sequence(&tags, &tags.set);
}

#[test]
fn test_unordered_set_host_iterates_like_its_set() {
    let seen = Seen((0..32).collect());
    let forwarded: Vec<u64> = seen.iter().copied().collect();
    let direct: Vec<u64> = seen.0.iter().copied().collect();
    assert_eq!(forwarded, direct);
    assert_eq!(seen.underestimated_count(), 32);
}

#[test]
fn test_borrowed_host_is_into_iterator() {
    let host = wrap(VecDeque::from([5, 6, 7]));
    let mut seen = Vec::new();
    for element in &host {
        seen.push(*element);
    }
    assert_eq!(seen, [5, 6, 7]);
}

// =============================================================================
// Counts and storage
// =============================================================================

#[test]
fn test_underestimated_count_never_exceeds_count() {
    let list: LinkedList<i32> = (1..=5).collect();
    let host = wrap(list.clone());
    assert_eq!(host.underestimated_count(), 5);
    check_sequence(&host, &list);

    let array = wrap([0u8; 3]);
    assert_eq!(array.underestimated_count(), 3);
}

#[test]
fn test_contiguous_storage_is_optional() {
    let vector = wrap(vec![1, 2, 3]);
    let total = vector.with_contiguous_storage(|s| s.iter().sum::<i32>());
    assert_eq!(total, Some(6));

    let list = wrap(LinkedList::from([1, 2, 3]));
    assert_eq!(list.with_contiguous_storage(|s| s.len()), None);

    let tags = Tags {
        set: BTreeSet::new(),
    };
    assert_eq!(tags.with_contiguous_storage(|s| s.len()), None);
}
