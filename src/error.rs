//! Error types for scans that can have no answer

use thiserror::Error;

/// Reasons a scan produced no meaningful result
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The sequence is shorter than the requested window
    #[error("sequence of length {len} has no window of size {window}")]
    InsufficientLength { len: usize, window: usize },

    /// A window of size zero has no average
    #[error("window size must be at least 1")]
    EmptyWindow,

    /// The best window sum could not be converted to `f64`
    #[error("window sum is not representable as f64")]
    NotRepresentable,

    /// A running window sum does not fit in the element type
    #[error("window sum overflows the element type")]
    Overflow,
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ScanError::InsufficientLength { len: 3, window: 5 };
        assert_eq!(err.to_string(), "sequence of length 3 has no window of size 5");
        assert_eq!(ScanError::EmptyWindow.to_string(), "window size must be at least 1");
    }
}
