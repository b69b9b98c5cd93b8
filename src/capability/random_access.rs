//! Constant-time index arithmetic.

use super::BidirectionalCollection;

/// A bidirectional collection whose `index_offset`, `index_offset_limited`
/// and `distance` run in O(1).
///
/// There is nothing new to call: the trait is a stronger complexity
/// contract over the same operations.
pub trait RandomAccessCollection: BidirectionalCollection {}

/// `i + distance` for integer positions.
#[inline]
pub fn offset_position(i: usize, distance: isize) -> usize {
    match i.checked_add_signed(distance) {
        Some(next) => next,
        None => panic!("index {i} offset by {distance} is out of range"),
    }
}

/// `i + distance` for integer positions, or `None` when `limit` lies
/// strictly between `i` and the result.
#[inline]
pub fn offset_position_limited(i: usize, distance: isize, limit: usize) -> Option<usize> {
    let room = position_distance(i, limit);
    let passes_limit = if distance > 0 {
        room >= 0 && room < distance
    } else {
        room <= 0 && distance < room
    };
    if passes_limit {
        None
    } else {
        Some(offset_position(i, distance))
    }
}

/// Signed distance between integer positions.
#[inline]
pub fn position_distance(start: usize, end: usize) -> isize {
    end as isize - start as isize
}
