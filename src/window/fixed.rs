//! Fixed-size sliding window: maximum average over all windows of width k
//!
//! The window sum is maintained incrementally. Each step removes the element
//! leaving the window and adds the one entering it, so the whole scan is a
//! single O(n) pass with O(1) extra space. The division by `k` happens once,
//! on the best sum, rather than once per window.

use std::ops::Range;

use num_traits::{CheckedAdd, CheckedSub, Num, ToPrimitive};
use tracing::{debug, trace};

use crate::error::{Result, ScanError};

/// The window with the largest sum found by [`best_window`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestWindow<T> {
    /// Index of the first element in the window
    pub start: usize,
    /// Window width (the `k` the scan was run with)
    pub width: usize,
    /// Sum of the elements in `[start, start + width)`
    pub sum: T,
}

impl<T> BestWindow<T>
where
    T: Copy + ToPrimitive,
{
    /// Index range covered by the window
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.width
    }

    /// Arithmetic mean of the window
    pub fn average(&self) -> Result<f64> {
        let sum = self.sum.to_f64().ok_or(ScanError::NotRepresentable)?;
        Ok(sum / self.width as f64)
    }
}

/// Finds the contiguous window of width `k` with the largest sum
///
/// When several windows share the maximum sum, the leftmost one is returned.
///
/// # Errors
///
/// * [`ScanError::EmptyWindow`] if `k == 0`
/// * [`ScanError::InsufficientLength`] if `seq.len() < k`
/// * [`ScanError::Overflow`] if a running window sum does not fit in `T`
///
/// # Examples
///
/// ```
/// use scanpat::best_window;
///
/// let best = best_window(&[1, 12, -5, -6, 50, 3], 4).unwrap();
/// assert_eq!(best.range(), 1..5);
/// assert_eq!(best.sum, 51);
/// ```
pub fn best_window<T>(seq: &[T], k: usize) -> Result<BestWindow<T>>
where
    T: Copy + Num + PartialOrd + CheckedAdd + CheckedSub,
{
    if k == 0 {
        return Err(ScanError::EmptyWindow);
    }
    if seq.len() < k {
        return Err(ScanError::InsufficientLength {
            len: seq.len(),
            window: k,
        });
    }

    let mut window_sum = seq[..k]
        .iter()
        .try_fold(T::zero(), |acc, x| acc.checked_add(x))
        .ok_or(ScanError::Overflow)?;
    let mut best = BestWindow {
        start: 0,
        width: k,
        sum: window_sum,
    };

    for i in k..seq.len() {
        window_sum = window_sum
            .checked_sub(&seq[i - k])
            .and_then(|partial| partial.checked_add(&seq[i]))
            .ok_or(ScanError::Overflow)?;
        if window_sum > best.sum {
            best.start = i + 1 - k;
            best.sum = window_sum;
        }
    }

    trace!(len = seq.len(), k, start = best.start, "fixed window scan finished");
    Ok(best)
}

/// Maximum average over all windows of width `k`, as a `Result`
///
/// Unlike [`max_average`], a missing window is reported as an error, so a
/// genuine average of `0.0` cannot be confused with "no answer".
pub fn try_max_average<T>(seq: &[T], k: usize) -> Result<f64>
where
    T: Copy + Num + PartialOrd + CheckedAdd + CheckedSub + ToPrimitive,
{
    best_window(seq, k)?.average()
}

/// Maximum average over all windows of width `k`
///
/// Returns the sentinel `0.0` when there is no valid window (`seq.len() < k`
/// or `k == 0`) and when a window sum overflows `T`. Callers that need to
/// tell the sentinel apart from a real zero average should check the length
/// first or use [`try_max_average`].
///
/// # Examples
///
/// ```
/// use scanpat::max_average;
///
/// assert_eq!(max_average(&[1, 12, -5, -6, 50, 3], 4), 12.75);
/// assert_eq!(max_average(&[1, 2], 3), 0.0);
/// ```
pub fn max_average<T>(seq: &[T], k: usize) -> f64
where
    T: Copy + Num + PartialOrd + CheckedAdd + CheckedSub + ToPrimitive,
{
    try_max_average(seq, k).unwrap_or_else(|err| {
        debug!(%err, "no window average, returning sentinel");
        0.0
    })
}
