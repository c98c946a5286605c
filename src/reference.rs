//! Brute-force reference scans
//!
//! These recompute every window and try every pair directly. They are slow
//! (quadratic or O(n·k)) but obviously correct, and serve as the baseline the
//! linear scans are checked against.

use num_traits::{Num, ToPrimitive};

/// Maximum window average computed by summing every window from scratch
///
/// Returns `None` when there is no window of width `k`.
pub fn reference_max_average<T>(seq: &[T], k: usize) -> Option<f64>
where
    T: Copy + Num + PartialOrd + ToPrimitive,
{
    if k == 0 || seq.len() < k {
        return None;
    }

    let mut best: Option<T> = None;
    for window in seq.windows(k) {
        let sum = window.iter().fold(T::zero(), |acc, &x| acc + x);
        if best.map_or(true, |b| sum > b) {
            best = Some(sum);
        }
    }

    best.and_then(|sum| sum.to_f64()).map(|sum| sum / k as f64)
}

/// Every index pair `(i, j)`, `i < j`, whose elements sum to `target`
pub fn reference_pairs<T>(seq: &[T], target: T) -> Vec<(usize, usize)>
where
    T: Copy + Num,
{
    let mut pairs = Vec::new();
    for i in 0..seq.len() {
        for j in (i + 1)..seq.len() {
            if seq[i] + seq[j] == target {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_max_average() {
        assert_eq!(reference_max_average(&[1, 12, -5, -6, 50, 3], 4), Some(12.75));
        assert_eq!(reference_max_average(&[1, 2], 3), None);
        assert_eq!(reference_max_average(&[1, 2], 0), None);
    }

    #[test]
    fn test_reference_pairs() {
        assert_eq!(reference_pairs(&[1, 2, 3, 4, 6], 6), vec![(1, 3)]);
        assert_eq!(reference_pairs(&[2, 2, 2], 4), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(reference_pairs(&[1, 2], 10).is_empty());
    }
}
