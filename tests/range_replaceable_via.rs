//! Range-replaceable layer: one primitive, every other mutator derived.

mod common;

use std::collections::{LinkedList, VecDeque};

use collection_via::capability::{Collection, RangeReplaceableCollection};
use collection_via::prelude::*;
use common::{Wrapper, check_collection, check_replace, wrap};

#[derive(Debug, Default, Via)]
#[via(bidirectional_collection, range_replaceable_collection)]
struct Inbox {
    #[via(mut)]
    messages: LinkedList<String>,
}

fn contents<C: Clone + IntoIterator>(host: &Wrapper<C>) -> Vec<C::Item> {
    host.inner.clone().into_iter().collect()
}

// =============================================================================
// The primitive
// =============================================================================

#[test]
fn test_replace_middle_with_longer_run() {
    let mut host = wrap(vec![10, 20, 30, 40, 50]);
    let removed = host.replace_subrange(1..4, [1, 1, 1, 1, 1]);
    assert_eq!(removed, [20, 30, 40]);
    assert_eq!(host.inner, [10, 1, 1, 1, 1, 1, 50]);
    assert_eq!(host.count(), 7);
}

#[test]
fn test_replace_matches_every_container() {
    let base = [10, 20, 30, 40, 50];
    let cases: [(std::ops::Range<usize>, Vec<i32>); 5] = [
        (1..4, vec![1, 1, 1, 1, 1]),
        (0..0, vec![7]),
        (5..5, vec![8, 9]),
        (0..5, vec![]),
        (2..3, vec![0]),
    ];
    for (bounds, replacement) in cases {
        let mut vector = base.to_vec();
        let mut host = wrap(vector.clone());
        check_replace(&mut host, &mut vector, bounds.clone(), replacement.clone());

        let mut deque: VecDeque<i32> = base.into_iter().collect();
        let mut host = wrap(deque.clone());
        check_replace(&mut host, &mut deque, bounds.clone(), replacement.clone());

        let mut list: LinkedList<i32> = base.into_iter().collect();
        let mut host = wrap(list.clone());
        check_replace(&mut host, &mut list, bounds, replacement);
    }
}

#[test]
fn test_replaced_span_reads_back_in_order() {
    let mut host = wrap(VecDeque::from(['a', 'b', 'c', 'd']));
    host.replace_subrange(1..3, ['x', 'y', 'z']);
    let span: Vec<char> = (1..4).map(|i| *host.at(i)).collect();
    assert_eq!(span, ['x', 'y', 'z']);
    assert_eq!(host.count(), 5);
}

// =============================================================================
// Derived mutators
// =============================================================================

#[test]
fn test_insert_is_empty_range_replacement() {
    let mut inserted = wrap(vec![1, 2, 4]);
    let mut replaced = inserted.clone();
    inserted.insert(2, 3);
    replaced.replace_subrange(2..2, [3]);
    assert_eq!(inserted, replaced);

    let mut list = wrap(LinkedList::from([1, 2, 4]));
    list.insert(2, 3);
    assert_eq!(contents(&list), [1, 2, 3, 4]);
}

#[test]
fn test_remove_is_single_element_range_removal() {
    let mut host = wrap(vec![5, 6, 7]);
    let mut replaced = host.clone();
    assert_eq!(host.remove(1), 6);
    assert_eq!(replaced.replace_subrange(1..2, []), [6]);
    assert_eq!(host, replaced);

    let mut deque = wrap(VecDeque::from([5, 6, 7]));
    assert_eq!(deque.remove(0), 5);
    assert_eq!(contents(&deque), [6, 7]);
}

#[test]
fn test_push_append_and_insert_all() {
    let mut host = wrap(VecDeque::new());
    host.push(1);
    host.append_all([4, 5]);
    host.insert_all(1, [2, 3]);
    assert_eq!(contents(&host), [1, 2, 3, 4, 5]);
}

#[test]
fn test_removals_from_either_end() {
    let mut host = wrap(LinkedList::from_iter(0..10));
    assert_eq!(host.remove_first(), 0);
    assert_eq!(host.remove_last(), 9);
    host.remove_first_n(2);
    host.remove_last_n(3);
    assert_eq!(contents(&host), [3, 4, 5]);
    host.remove_range(0..2);
    assert_eq!(host.pop_last(), Some(5));
    assert_eq!(host.pop_last(), None);
    host.remove_first_n(0);
}

#[test]
fn test_remove_all_keeping_capacity() {
    let mut host = wrap(Vec::<i32>::with_capacity(64));
    host.append_all(0..40);
    host.remove_all(true);
    assert!(host.is_empty());
    assert!(host.capacity() >= 40);

    host.append_all(0..3);
    host.remove_all(false);
    assert!(host.is_empty());
}

#[test]
fn test_remove_all_where_keeps_order() {
    let mut vector = wrap(vec![1, 2, 3, 4, 5, 6]);
    vector.remove_all_where(|n| n % 3 == 0);
    assert_eq!(vector.inner, [1, 2, 4, 5]);

    let mut list = wrap(LinkedList::from([1, 2, 3, 4, 5, 6]));
    list.remove_all_where(|n| n % 2 == 1);
    assert_eq!(contents(&list), [2, 4, 6]);
}

#[test]
fn test_reserve_capacity() {
    let mut host = wrap(VecDeque::<u16>::new());
    host.reserve_capacity(100);
    assert!(host.inner.capacity() >= 100);
}

// =============================================================================
// Empty construction
// =============================================================================

#[test]
fn test_empty_host_then_append() {
    let mut inbox = Inbox::default();
    assert_eq!(inbox.count(), 0);
    inbox.push("3".to_string());
    inbox.push("1".to_string());
    inbox.push("2".to_string());
    assert_eq!(inbox.count(), 3);
    let read: Vec<&str> = inbox.iter().map(String::as_str).collect();
    assert_eq!(read, ["3", "1", "2"]);
}

#[test]
fn test_constructors() {
    let host = Wrapper::<Vec<u8>>::from_elements([3, 1, 2]);
    assert_eq!(host.inner, [3, 1, 2]);

    let host = Wrapper::<VecDeque<char>>::repeating('z', 3);
    assert_eq!(host.inner, ['z', 'z', 'z']);

    let host: Wrapper<LinkedList<i32>> = (1..=4).collect();
    assert_eq!(contents(&host), [1, 2, 3, 4]);
    check_collection(&host, &LinkedList::from([1, 2, 3, 4]));
}

#[test]
fn test_extend() {
    let mut inbox = Inbox::default();
    inbox.extend(["a", "b"].map(String::from));
    assert_eq!(inbox.last().map(String::as_str), Some("b"));
}

#[test]
fn test_std_container_mutators_agree_with_primitive() {
    let mut native: VecDeque<i32> = (0..8).collect();
    let mut composed = native.clone();
    RangeReplaceableCollection::remove(&mut native, 3);
    composed.replace_subrange(3..4, []);
    assert_eq!(native, composed);
    assert_eq!(Collection::count(&native), 7);
}

// =============================================================================
// Faults
// =============================================================================

#[test]
#[should_panic(expected = "Can't remove first element from an empty collection")]
fn test_remove_first_from_empty_faults() {
    Inbox::default().remove_first();
}

#[test]
#[should_panic]
fn test_replace_past_end_faults() {
    wrap(vec![1, 2]).replace_subrange(1..5, [0]);
}

#[test]
#[should_panic(expected = "Can't remove more items from a collection than it has")]
fn test_remove_too_many_faults() {
    wrap(vec![1, 2]).remove_first_n(3);
}
