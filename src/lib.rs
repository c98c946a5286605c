//! # scanpat: sliding-window and two-pointer scan patterns
//!
//! A small library of linear scans over slices and linked structures. Each
//! scan is a single pass with O(1) extra space and an explicit answer for the
//! "nothing found" case.
//!
//! ## Scans
//!
//! 1. **Fixed-size sliding window** ([`max_average`]): best average over all
//!    windows of width `k`, keeping a running sum.
//!
//! 2. **Converging two pointers** ([`pair_with_sum`]): a pair in a sorted
//!    slice summing to a target, found by moving pointers in from both ends.
//!
//! 3. **Fast/slow pointers** ([`has_cycle`]): Floyd's cycle detection over
//!    any [`Successors`] structure, such as a [`NodeArena`].
//!
//! 4. **In-place compaction** ([`move_zeroes`]): non-zero elements moved to
//!    the front in order, zeros written behind them.
//!
//! ## Usage
//!
//! ```
//! use scanpat::{has_cycle, max_average, move_zeroes, pair_with_sum, NodeArena};
//!
//! assert_eq!(max_average(&[1, 12, -5, -6, 50, 3], 4), 12.75);
//! assert_eq!(pair_with_sum(&[1, 2, 3, 4, 6], 6), Some((1, 3)));
//!
//! let mut nums = [0, 1, 0, 3, 12];
//! move_zeroes(&mut nums);
//! assert_eq!(nums, [1, 3, 12, 0, 0]);
//!
//! let (arena, head) = NodeArena::from_values([1, 2, 3]);
//! assert!(!has_cycle(&arena, head));
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod pointers;
pub mod reference;
pub mod window;

// Re-export primary components
pub use config::DemoConfig;
pub use error::{Result, ScanError};
pub use list::{ListNode, NodeArena, NodeId, Successors};
pub use pointers::{compact_by, has_cycle, move_zeroes, pair_with_sum, CycleState, FastSlowScan};
pub use reference::{reference_max_average, reference_pairs};
pub use window::{best_window, max_average, try_max_average, BestWindow};

/// Version information for the scanpat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
