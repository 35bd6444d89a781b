use num_traits::Float;

use super::Statistic;
use crate::sample::{Sample, Weights};

/// Minimum and maximum of `xs`.
///
/// Returns `(NaN, NaN)` for an empty slice. Both bounds start at `xs[0]` and
/// are only replaced through `<`/`>`, so a NaN later in the slice is skipped
/// while a leading NaN is never replaced.
pub fn bounds<F: Float>(xs: &[F]) -> (F, F) {
    let Some(&first) = xs.first() else {
        return (F::nan(), F::nan());
    };

    let (mut min, mut max) = (first, first);
    for &x in xs {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    (min, max)
}

impl<F: Float> Sample<F> {
    /// Minimum and maximum of the sample.
    ///
    /// Zero-weighted values are ignored; `(NaN, NaN)` if nothing has weight.
    /// Constant time for a sorted unweighted sample, and for a sorted weighted
    /// sample whose end points carry weight.
    pub fn bounds(&self) -> (F, F) {
        self.debug_assert_sorted_claim();

        let weights = match &self.weights {
            _ if self.values.is_empty() => return (F::nan(), F::nan()),
            Weights::Unit if self.sorted => {
                return match (self.values.first(), self.values.last()) {
                    (Some(&min), Some(&max)) => (min, max),
                    _ => (F::nan(), F::nan()),
                };
            }
            Weights::Unit => return bounds(&self.values),
            Weights::Explicit(w) => w,
        };

        let supported = || {
            self.values
                .iter()
                .zip(weights)
                .filter(|&(_, w)| !w.is_zero())
                .map(|(&x, _)| x)
        };

        if self.sorted {
            match (supported().next(), supported().next_back()) {
                (Some(min), Some(max)) => (min, max),
                _ => (F::nan(), F::nan()),
            }
        } else {
            supported()
                .fold(None, |acc, x| match acc {
                    None => Some((x, x)),
                    Some((min, max)) => Some((
                        if x < min { x } else { min },
                        if x > max { x } else { max },
                    )),
                })
                .unwrap_or((F::nan(), F::nan()))
        }
    }
}

/// `(min, max)` of a sample; see [`Sample::bounds`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds;

impl<F: Float> Statistic<Sample<F>, (F, F)> for Bounds {
    #[inline]
    fn compute(&self, data: &Sample<F>) -> (F, F) {
        data.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        let (lo, hi) = bounds::<f64>(&[]);
        assert!(lo.is_nan() && hi.is_nan());

        let (lo, hi) = Sample::<f32>::default().bounds();
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn unweighted_scan() {
        assert_eq!(bounds(&[3.0, 1.0, 2.0]), (1.0, 3.0));
        assert_eq!(bounds(&[-4.5_f32]), (-4.5, -4.5));
        assert_eq!(Sample::new(vec![3.0, 1.0, 2.0]).bounds(), (1.0, 3.0));
    }

    #[test]
    fn later_nan_is_skipped() {
        assert_eq!(bounds(&[2.0, f64::NAN, 5.0, -1.0]), (-1.0, 5.0));
    }

    #[test]
    fn leading_nan_sticks() {
        let (lo, hi) = bounds(&[f64::NAN, 1.0, 2.0]);
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn sorted_unweighted_uses_end_points() {
        let s = Sample::new(vec![-1.0, 0.0, 7.0]).with_sorted(true);
        assert_eq!(s.bounds(), (-1.0, 7.0));
    }

    #[test]
    fn zero_weights_are_ignored() {
        let s = Sample::weighted(vec![10.0, 20.0, 30.0], vec![1.0, 0.0, 1.0]).unwrap();
        assert_eq!(s.bounds(), (10.0, 30.0));

        let s = Sample::weighted(vec![5.0, 10.0, 20.0, 30.0], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(s.bounds(), (10.0, 20.0));

        let mut sorted = s.copy();
        sorted.sort();
        assert_eq!(sorted.bounds(), (10.0, 20.0));
    }

    #[test]
    fn all_zero_weights_are_nan() {
        let mut s = Sample::weighted(vec![2.0, 1.0], vec![0.0, 0.0]).unwrap();
        let (lo, hi) = s.bounds();
        assert!(lo.is_nan() && hi.is_nan());

        s.sort();
        let (lo, hi) = s.bounds();
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn infinite_values_with_weight_count() {
        let s = Sample::weighted(vec![f64::INFINITY, 1.0], vec![1.0, 0.0]).unwrap();
        assert_eq!(s.bounds(), (f64::INFINITY, f64::INFINITY));
    }
}
