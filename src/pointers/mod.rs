// Two-pointer scans

pub mod compaction;
pub mod converging;
pub mod fast_slow;

pub use compaction::{compact_by, move_zeroes};
pub use converging::pair_with_sum;
pub use fast_slow::{has_cycle, CycleState, FastSlowScan};
