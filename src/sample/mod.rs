mod error;
mod sort;

use num_traits::Float;
use tracing::debug;

use crate::statistics::Statistic;

pub use error::SampleError;

/// Per-value weights of a [`Sample`].
///
/// `Unit` is not the same thing as an explicit vector of ones: it selects the
/// unweighted code paths, which are cheaper and bit-for-bit identical to the
/// free functions such as [`mean`](crate::mean).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Weights<F> {
    /// Every value has implicit weight 1.
    #[default]
    Unit,
    /// `weights[i]` is the non-negative weight of `values[i]`.
    Explicit(Vec<F>),
}

impl<F> Weights<F> {
    /// Explicit weights, if any.
    #[inline]
    pub fn as_slice(&self) -> Option<&[F]> {
        match self {
            Weights::Unit => None,
            Weights::Explicit(w) => Some(w),
        }
    }

    /// `true` for [`Weights::Unit`].
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Weights::Unit)
    }
}

/// A collection of possibly weighted observations.
///
/// Fields are public so a sample can be assembled directly. The weight
/// invariants (matching length, every weight `>= 0`) are checked by
/// [`Sample::weighted`] and [`Sample::validate`]; operations on a sample that
/// violates them produce unspecified numbers.
///
/// `sorted` is a claim, not a cache: operations trust it without rescanning.
/// Mutating `values` after setting it breaks the contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample<F> {
    /// Observed values, NaN allowed.
    pub values: Vec<F>,
    /// Weights paired with `values`.
    pub weights: Weights<F>,
    /// `values` is known to be in ascending order.
    pub sorted: bool,
}

impl<F> Sample<F> {
    /// Create an unweighted, unsorted sample.
    pub fn new(values: Vec<F>) -> Self {
        Self {
            values,
            weights: Weights::Unit,
            sorted: false,
        }
    }

    /// Set the sortedness claim.
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Number of observations, zero-weighted ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `true` if the sample carries explicit weights.
    pub fn is_weighted(&self) -> bool {
        !self.weights.is_unit()
    }

    /// Estimate a statistic from the sample.
    ///
    /// Statistics compose as tuples: `sample.estimate((Mean, Bounds))`.
    pub fn estimate<Output>(&self, statistic: impl Statistic<Self, Output>) -> Output {
        statistic.compute(self)
    }
}

impl<F: Float> Sample<F> {
    /// Create a weighted sample, checking that every value has exactly one
    /// non-negative weight.
    pub fn weighted(values: Vec<F>, weights: Vec<F>) -> Result<Self, SampleError> {
        let sample = Self {
            values,
            weights: Weights::Explicit(weights),
            sorted: false,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Check the weight invariants.
    ///
    /// Samples built by field assignment are never checked implicitly.
    pub fn validate(&self) -> Result<(), SampleError> {
        let Some(weights) = self.weights.as_slice() else {
            return Ok(());
        };

        if weights.len() != self.values.len() {
            let err = SampleError::LengthMismatch {
                values: self.values.len(),
                weights: weights.len(),
            };
            debug!(%err, "rejected sample");
            return Err(err);
        }

        if let Some(index) = weights.iter().position(|&w| w.is_nan() || w < F::zero()) {
            let err = SampleError::InvalidWeight { index };
            debug!(%err, "rejected sample");
            return Err(err);
        }

        Ok(())
    }

    /// Return an independent copy.
    ///
    /// The copy shares no storage with `self`, so either can be sorted or
    /// mutated without affecting the other. The `sorted` flag is copied as-is.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            values: self.values.clone(),
            weights: self.weights.clone(),
            sorted: self.sorted,
        }
    }

    /// Panics in debug builds if the sortedness claim is false.
    #[inline]
    pub(crate) fn debug_assert_sorted_claim(&self) {
        debug_assert!(
            !self.sorted || sort::is_ascending(&self.values),
            "sample flagged as sorted but values are not ascending"
        );
    }
}

impl<F> FromIterator<F> for Sample<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<F> IntoIterator for Sample<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<F> AsRef<[F]> for Sample<F> {
    fn as_ref(&self) -> &[F] {
        &self.values
    }
}
