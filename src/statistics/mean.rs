use num_traits::{Float, FromPrimitive};

use super::{Statistic, count};
use crate::sample::{Sample, Weights};

/// Arithmetic mean of `xs`, NaN when empty.
///
/// Uses the running update `m += (x - m) / (i + 1)` rather than `sum / n`,
/// which keeps intermediate values at the scale of the data instead of the
/// scale of the total.
pub fn mean<F: Float + FromPrimitive>(xs: &[F]) -> F {
    if xs.is_empty() {
        return F::nan();
    }

    let mut m = F::zero();
    for (i, &x) in xs.iter().enumerate() {
        m = m + (x - m) / count(i + 1);
    }
    m
}

impl<F: Float + FromPrimitive> Sample<F> {
    /// Weighted arithmetic mean.
    ///
    /// Running update over cumulative weight `W`:
    /// ```text
    /// W += w;  m += (x - m) · w / W
    /// ```
    /// Zero-weighted values are skipped before the update, so a zero-weight
    /// prefix never divides by a zero `W`. NaN when empty or when every
    /// weight is zero.
    pub fn mean(&self) -> F {
        let weights = match &self.weights {
            Weights::Unit => return mean(&self.values),
            Weights::Explicit(w) => w,
        };

        let mut m = F::zero();
        let mut wsum = F::zero();
        for (&x, &w) in self.values.iter().zip(weights) {
            if w.is_zero() {
                continue;
            }
            wsum = wsum + w;
            m = m + (x - m) * w / wsum;
        }

        if wsum.is_zero() { F::nan() } else { m }
    }
}

/// Arithmetic mean of a sample; see [`Sample::mean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<F: Float + FromPrimitive> Statistic<Sample<F>, F> for Mean {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> F {
        data.mean()
    }
}
