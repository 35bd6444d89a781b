use num_traits::{Float, FromPrimitive};

use super::{Statistic, count};
use crate::sample::{Sample, SampleError};

/// Sample standard deviation of `xs` (Bessel-corrected, `n - 1` denominator).
///
/// Single pass with Welford's update (Welford 1962):
/// ```text
/// k += 1
/// A' = A + (x - A) / k
/// Q += (x - A)(x - A')
/// ```
/// and the result `sqrt(Q / (k - 1))`. One element gives the IEEE result of
/// `0 / 0`, which is NaN. NaN when empty.
pub fn stddev<F: Float + FromPrimitive>(xs: &[F]) -> F {
    if xs.is_empty() {
        return F::nan();
    }

    let mut a = F::zero();
    let mut q = F::zero();
    let mut k = 0;
    for &x in xs {
        k += 1;
        let a_next = a + (x - a) / count(k);
        q = q + (x - a) * (x - a_next);
        a = a_next;
    }
    (q / count(k - 1)).sqrt()
}

impl<F: Float + FromPrimitive> Sample<F> {
    /// Sample standard deviation.
    ///
    /// # Panics
    /// On a non-empty weighted sample: there is no weighted estimator, and
    /// falling back to the unweighted one would be silently wrong. Use
    /// [`Sample::try_stddev`] to get an error instead.
    pub fn stddev(&self) -> F {
        match self.try_stddev() {
            Ok(sd) => sd,
            Err(err) => unimplemented!("{err}"),
        }
    }

    /// Sample standard deviation, or [`SampleError::WeightedStdDev`] for a
    /// non-empty weighted sample.
    pub fn try_stddev(&self) -> Result<F, SampleError> {
        if self.is_weighted() && !self.is_empty() {
            return Err(SampleError::WeightedStdDev);
        }
        Ok(stddev(&self.values))
    }
}

/// Sample standard deviation; see [`Sample::stddev`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDev;

impl<F: Float + FromPrimitive> Statistic<Sample<F>, F> for StdDev {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> F {
        data.stddev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn empty_is_nan() {
        assert!(stddev::<f64>(&[]).is_nan());
        assert!(Sample::<f32>::default().stddev().is_nan());
    }

    #[test]
    fn single_element_is_not_finite() {
        assert!(!stddev(&[5.0_f64]).is_finite());
        assert!(!Sample::new(vec![5.0_f32]).stddev().is_finite());
    }

    #[test]
    fn constant_sequence_is_zero() {
        assert_eq!(stddev(&[2.5_f64; 10]), 0.0);
        assert_eq!(stddev(&[-1.0_f32, -1.0]), 0.0);
    }

    #[test]
    fn bessel_corrected() {
        assert_abs_diff_eq!(stddev(&[3.0_f64, 1.0, 2.0]), 1.0, epsilon = 1e-12);
        // population sd of this set is 2, sample sd is sqrt(32 / 7)
        let xs = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(stddev(&xs), (32.0_f64 / 7.0).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn stable_under_large_offset() {
        // The naive Σx² - (Σx)²/n formula loses every digit here.
        let xs: Vec<f64> = [4.0, 7.0, 13.0, 16.0].iter().map(|x| x + 1e9).collect();
        assert_relative_eq!(stddev(&xs), 30.0_f64.sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn weighted_is_an_error() {
        let s = Sample::weighted(vec![1.0, 2.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(s.try_stddev(), Err(SampleError::WeightedStdDev));
    }

    #[test]
    #[should_panic(expected = "weighted standard deviation is not implemented")]
    fn weighted_panics() {
        let s = Sample::weighted(vec![1.0, 2.0], vec![1.0, 1.0]).unwrap();
        let _ = s.stddev();
    }

    #[test]
    fn empty_weighted_is_nan() {
        let s = Sample::<f64>::weighted(vec![], vec![]).unwrap();
        assert!(s.stddev().is_nan());
    }
}
