use num_traits::{Float, FromPrimitive};

use super::{Statistic, count};
use crate::sample::{Sample, Weights};

/// Sum of `xs`, accumulated strictly left to right.
///
/// The order is part of the contract: reordering changes rounding.
pub fn sum<F: Float>(xs: &[F]) -> F {
    xs.iter().fold(F::zero(), |acc, &x| acc + x)
}

impl<F: Float> Sample<F> {
    /// Weighted sum `Σ xᵢ·wᵢ`, or the plain sum when unweighted.
    ///
    /// Zero-weighted values contribute nothing, even when they are infinite
    /// or NaN.
    pub fn sum(&self) -> F {
        match &self.weights {
            Weights::Unit => sum(&self.values),
            Weights::Explicit(weights) => self
                .values
                .iter()
                .zip(weights)
                .filter(|&(_, w)| !w.is_zero())
                .fold(F::zero(), |acc, (&x, &w)| acc + x * w),
        }
    }
}

impl<F: Float + FromPrimitive> Sample<F> {
    /// Total weight: the number of values when unweighted, otherwise the sum
    /// of the weights.
    pub fn weight(&self) -> F {
        match &self.weights {
            Weights::Unit => count(self.values.len()),
            Weights::Explicit(weights) => sum(weights),
        }
    }
}

/// (Weighted) sum of a sample; see [`Sample::sum`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl<F: Float> Statistic<Sample<F>, F> for Sum {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> F {
        data.sum()
    }
}

/// Total weight of a sample; see [`Sample::weight`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalWeight;

impl<F: Float + FromPrimitive> Statistic<Sample<F>, F> for TotalWeight {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> F {
        data.weight()
    }
}
