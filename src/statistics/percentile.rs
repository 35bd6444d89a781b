use num_traits::{Float, FromPrimitive};

use super::{Statistic, constant, count, sum};
use crate::sample::{Sample, Weights};

impl<F: Float + FromPrimitive> Sample<F> {
    /// Value at fractional rank `p` (nearest rank, no interpolation).
    ///
    /// `p <= 0` gives the minimum and `p >= 1` the maximum, as reported by
    /// [`Sample::bounds`]. NaN for an empty sample or one whose weights are
    /// all zero.
    ///
    /// An unsorted sample is sorted on a copy; `self` is never reordered.
    /// For a sorted unweighted sample this is constant time, otherwise one
    /// linear scan per call.
    pub fn percentile(&self, p: F) -> F {
        if self.is_empty() {
            return F::nan();
        } else if p <= F::zero() {
            return self.bounds().0;
        } else if p >= F::one() {
            return self.bounds().1;
        }

        self.sorted_view().percentile_of_sorted(p)
    }

    /// Interquartile range `Q(0.75) - Q(0.25)`.
    ///
    /// Sorts at most once for both quartiles.
    pub fn iqr(&self) -> F {
        let sorted = self.sorted_view();
        sorted.percentile(constant(0.75)) - sorted.percentile(constant(0.25))
    }

    fn percentile_of_sorted(&self, p: F) -> F {
        self.debug_assert_sorted_claim();

        let n = self.values.len();
        match &self.weights {
            Weights::Unit => {
                // Truncate, don't round.
                let rank = (p * count(n - 1)).floor();
                let idx = rank.to_usize().map_or(0, |i| i.min(n - 1));
                self.values.get(idx).copied().unwrap_or_else(F::nan)
            }
            Weights::Explicit(weights) => {
                let total = sum(weights);
                if total.is_zero() {
                    return F::nan();
                }

                // TODO: keep cumulative weights on sorted samples so this can
                // binary search instead of scanning.
                let mut target = total * p;
                for (&x, &w) in self.values.iter().zip(weights) {
                    target = target - w;
                    if target < F::zero() {
                        return x;
                    }
                }
                // Rounding left `target` at or above zero. Zero-weighted
                // values never count, so fall back to the last supported one.
                self.bounds().1
            }
        }
    }
}

/// Percentile estimator for a fixed rank; see [`Sample::percentile`].
#[derive(Debug, Clone, Copy)]
pub struct Percentile {
    p: f64,
}

impl Percentile {
    /// Estimator for rank `p`. Values outside `[0, 1]` are clamped when
    /// computed.
    #[inline]
    pub fn new(p: f64) -> Self {
        Self { p }
    }

    /// Convenience constructor for median (p = 0.5).
    #[inline]
    pub fn median() -> Self {
        Self { p: 0.5 }
    }
}

impl<F: Float + FromPrimitive> Statistic<Sample<F>, F> for Percentile {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> F {
        data.percentile(constant(self.p))
    }
}

/// Interquartile range; see [`Sample::iqr`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Iqr;

impl<F: Float + FromPrimitive> Statistic<Sample<F>, F> for Iqr {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> F {
        data.iqr()
    }
}
