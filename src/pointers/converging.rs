//! Converging two-pointer search over a sorted slice

use std::cmp::Ordering;

use num_traits::{CheckedAdd, Zero};
use tracing::trace;

/// Finds indices `(i, j)`, `i < j`, with `seq[i] + seq[j] == target`
///
/// Pointers start at both ends and move inward: a sum below the target
/// advances the left pointer, a sum above it retreats the right one. The
/// first pair reached this way is returned, which with duplicate values is
/// not necessarily the lowest pair in index order. Only one pair is ever
/// reported.
///
/// # Preconditions
///
/// `seq` must be sorted in non-decreasing order. This is not checked; on
/// unsorted input the result is unspecified (a pair may be missed, but any
/// pair returned does sum to `target`).
///
/// Sums that overflow `T` are treated as larger than any target when the
/// operands are positive and smaller than any target when they are negative.
///
/// # Examples
///
/// ```
/// use scanpat::pair_with_sum;
///
/// assert_eq!(pair_with_sum(&[1, 2, 3, 4, 6], 6), Some((1, 3)));
/// assert_eq!(pair_with_sum(&[1, 2, 3], 10), None);
/// ```
pub fn pair_with_sum<T>(seq: &[T], target: T) -> Option<(usize, usize)>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    if seq.len() < 2 {
        return None;
    }

    let mut left = 0;
    let mut right = seq.len() - 1;

    while left < right {
        match compare_sum(seq[left], seq[right], target) {
            Ordering::Equal => {
                trace!(left, right, "converging search found pair");
                return Some((left, right));
            }
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    trace!(len = seq.len(), "converging search found no pair");
    None
}

/// Orders `a + b` against `target` without overflowing
fn compare_sum<T>(a: T, b: T, target: T) -> Ordering
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    match a.checked_add(&b) {
        Some(sum) => sum.cmp(&target),
        // Overflow requires both operands to share a sign
        None if b > T::zero() => Ordering::Greater,
        None => Ordering::Less,
    }
}
