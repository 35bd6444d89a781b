//! Descriptive statistics.
//!
//! Unweighted building blocks ([`bounds`], [`sum`], [`mean`], [`stddev`]) work
//! on any slice. The same names exist as methods on [`Sample`](crate::Sample),
//! where they fall back to these functions when no weights are present, and
//! as [`Statistic`] values that can be combined into tuples.

mod bounds;
mod mean;
mod percentile;
mod stddev;
mod sum;

use num_traits::{Float, FromPrimitive};

pub use bounds::{Bounds, bounds};
pub use mean::{Mean, mean};
pub use percentile::{Iqr, Percentile};
pub use stddev::{StdDev, stddev};
pub use sum::{Sum, TotalWeight, sum};

/// `n` as a float. Saturates to infinity if `n` is out of range for `F`.
#[inline]
pub(crate) fn count<F: Float + FromPrimitive>(n: usize) -> F {
    F::from_usize(n).unwrap_or_else(F::infinity)
}

#[inline]
pub(crate) fn constant<F: Float + FromPrimitive>(x: f64) -> F {
    F::from_f64(x).unwrap_or_else(F::nan)
}

/// A quantity computed from data of type `D`.
pub trait Statistic<D, T> {
    /// Compute the statistic.
    fn compute(&self, data: &D) -> T;
}

impl<D, T, S> Statistic<D, T> for &S
where
    S: Statistic<D, T> + ?Sized,
{
    #[inline]
    fn compute(&self, data: &D) -> T {
        (**self).compute(data)
    }
}

// Tuples of statistics compute every member over the same data.
macro_rules! tuple_statistic {
    ($(($S:ident, $T:ident, $idx:tt)),+) => {
        impl<D, $($T, $S),+> Statistic<D, ($($T,)+)> for ($($S,)+)
        where
            $($S: Statistic<D, $T>),+
        {
            #[inline]
            fn compute(&self, data: &D) -> ($($T,)+) {
                ($(self.$idx.compute(data),)+)
            }
        }
    };
}

tuple_statistic!((S1, T1, 0));
tuple_statistic!((S1, T1, 0), (S2, T2, 1));
tuple_statistic!((S1, T1, 0), (S2, T2, 1), (S3, T3, 2));
tuple_statistic!((S1, T1, 0), (S2, T2, 1), (S3, T3, 2), (S4, T4, 3));
tuple_statistic!((S1, T1, 0), (S2, T2, 1), (S3, T3, 2), (S4, T4, 3), (S5, T5, 4));
tuple_statistic!(
    (S1, T1, 0),
    (S2, T2, 1),
    (S3, T3, 2),
    (S4, T4, 3),
    (S5, T5, 4),
    (S6, T6, 5)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;
    use approx::assert_abs_diff_eq;

    #[test]
    fn tuples_compute_each_member() {
        let s = Sample::new(vec![3.0, 1.0, 2.0]);
        let (m, (lo, hi), total) = s.estimate((Mean, Bounds, TotalWeight));
        assert_abs_diff_eq!(m, 2.0, epsilon = 1e-12);
        assert_eq!((lo, hi), (1.0, 3.0));
        assert_eq!(total, 3.0);
    }

    #[test]
    fn references_are_statistics() {
        let s = Sample::new(vec![1.0_f32, 2.0, 3.0]);
        let stat = Percentile::median();
        assert_eq!(s.estimate(&stat), 2.0);
    }
}
