// Sliding window scans

pub mod fixed;

pub use fixed::{best_window, max_average, try_max_average, BestWindow};
