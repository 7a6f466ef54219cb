//! Error types for reduction operations.

use thiserror::Error;

/// Errors that can occur while reducing a point set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// An index-based access reached beyond the current point set.
    ///
    /// This signals a caller contract violation, not a recoverable
    /// condition: indices are only valid in `[0, len)` as of the last
    /// compaction.
    #[error("index {index} out of range for point set of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the point set at the time of access.
        len: usize,
    },

    /// A negative tolerance was supplied.
    ///
    /// Rejected at the entry point, before any mutation of the set.
    #[error("tolerance must be non-negative")]
    InvalidTolerance,
}
