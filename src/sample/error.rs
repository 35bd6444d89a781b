use std::error::Error as StdError;
use std::fmt;

/// Errors raised when a [`Sample`](super::Sample) breaks its weight invariants,
/// or when an operation has no weighted counterpart.
///
/// Empty samples and all-zero weights are *not* errors: those cases are
/// reported through NaN results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// Explicit weights whose length differs from the value sequence.
    LengthMismatch {
        /// Number of values.
        values: usize,
        /// Number of weights.
        weights: usize,
    },
    /// A weight that is negative or NaN.
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
    },
    /// Standard deviation was requested for a weighted sample.
    WeightedStdDev,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::LengthMismatch { values, weights } => write!(
                f,
                "weight count ({weights}) does not match value count ({values})"
            ),
            SampleError::InvalidWeight { index } => {
                write!(f, "weight at index {index} is negative or NaN")
            }
            SampleError::WeightedStdDev => {
                write!(f, "weighted standard deviation is not implemented")
            }
        }
    }
}

impl StdError for SampleError {}
