//! In-place compaction with a read cursor and a write cursor

use num_traits::Zero;
use tracing::trace;

/// Moves every element matching `keep` to the front of `seq`, in order
///
/// A single forward pass copies kept elements to the write cursor; a second
/// short pass overwrites everything after the cursor with `fill`. The
/// rejected elements themselves are not preserved.
///
/// Returns the write cursor, i.e. the number of kept elements.
pub fn compact_by<T, F>(seq: &mut [T], mut keep: F, fill: T) -> usize
where
    T: Copy,
    F: FnMut(&T) -> bool,
{
    let mut write = 0;

    for read in 0..seq.len() {
        if keep(&seq[read]) {
            seq[write] = seq[read];
            write += 1;
        }
    }

    for slot in &mut seq[write..] {
        *slot = fill;
    }

    trace!(len = seq.len(), kept = write, "compaction finished");
    write
}

/// Moves all non-zero elements to the front, keeping their relative order,
/// and fills the rest of the slice with zero
///
/// # Examples
///
/// ```
/// use scanpat::move_zeroes;
///
/// let mut nums = [0, 1, 0, 3, 12];
/// move_zeroes(&mut nums);
/// assert_eq!(nums, [1, 3, 12, 0, 0]);
/// ```
pub fn move_zeroes<T>(seq: &mut [T])
where
    T: Copy + Zero,
{
    compact_by(seq, |x| !x.is_zero(), T::zero());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_input() {
        let mut nums = vec![0, 1, 0, 3, 12];
        move_zeroes(&mut nums);
        assert_eq!(nums, vec![1, 3, 12, 0, 0]);
    }

    #[test]
    fn test_edges() {
        let mut empty: Vec<i32> = vec![];
        move_zeroes(&mut empty);
        assert!(empty.is_empty());

        let mut zeros = vec![0, 0, 0];
        move_zeroes(&mut zeros);
        assert_eq!(zeros, vec![0, 0, 0]);

        let mut dense = vec![4, -2, 7];
        move_zeroes(&mut dense);
        assert_eq!(dense, vec![4, -2, 7]);
    }

    #[test]
    fn test_idempotent() {
        let mut nums = vec![0, 5, 0, 0, -1, 2, 0];
        move_zeroes(&mut nums);
        let once = nums.clone();
        move_zeroes(&mut nums);
        assert_eq!(nums, once);
    }

    #[test]
    fn test_negative_float_zero_is_canonicalized() {
        let mut nums = [-0.0f64, 1.5, 0.0];
        move_zeroes(&mut nums);
        assert_eq!(nums, [1.5, 0.0, 0.0]);
        assert!(nums[1].is_sign_positive());
    }

    #[test]
    fn test_compact_by_predicate() {
        let mut nums = [5, 8, 1, 6, 3, 4];
        let kept = compact_by(&mut nums, |x| x % 2 == 0, -1);
        assert_eq!(kept, 3);
        assert_eq!(nums, [8, 6, 4, -1, -1, -1]);
    }
}
