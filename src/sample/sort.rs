use std::cmp::Ordering;

use num_traits::Float;
use tracing::trace;

use super::{Sample, Weights};

/// Total ascending order over floats: NaN sorts before every number and
/// compares equal to other NaNs.
#[inline]
pub(crate) fn ascending<F: Float>(a: &F, b: &F) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => b.is_nan().cmp(&a.is_nan()),
    }
}

#[inline]
pub(crate) fn is_ascending<F: Float>(values: &[F]) -> bool {
    values.is_sorted_by(|a, b| ascending(a, b) != Ordering::Greater)
}

impl<F: Float> Sample<F> {
    /// Sort the sample in place and return it.
    ///
    /// Weights travel with their values. Does nothing beyond setting the
    /// flag when the sample is already flagged or already ascending.
    pub fn sort(&mut self) -> &mut Self {
        if self.sorted || is_ascending(&self.values) {
            self.sorted = true;
            return self;
        }

        trace!(len = self.values.len(), weighted = self.is_weighted(), "sorting sample");

        match &mut self.weights {
            Weights::Unit => self.values.sort_by(ascending),
            Weights::Explicit(weights) => {
                let mut pairs: Vec<(F, F)> = self
                    .values
                    .iter()
                    .copied()
                    .zip(weights.iter().copied())
                    .collect();
                pairs.sort_by(|a, b| ascending(&a.0, &b.0));

                let slots = self.values.iter_mut().zip(weights.iter_mut());
                for ((x, w), (x_slot, w_slot)) in pairs.into_iter().zip(slots) {
                    *x_slot = x;
                    *w_slot = w;
                }
            }
        }

        self.sorted = true;
        self
    }

    /// A sorted copy, or `self` untouched when it already claims to be sorted.
    pub(crate) fn sorted_view(&self) -> std::borrow::Cow<'_, Self> {
        if self.sorted {
            std::borrow::Cow::Borrowed(self)
        } else {
            let mut copy = self.copy();
            copy.sort();
            std::borrow::Cow::Owned(copy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_sorts_first() {
        let mut s = Sample::new(vec![2.0, f64::NAN, 1.0]);
        s.sort();
        assert!(s.values.first().is_some_and(|x| x.is_nan()));
        assert_eq!(s.values.get(1..), Some(&[1.0, 2.0][..]));
        assert!(s.sorted);
    }

    #[test]
    fn weights_follow_values() {
        let mut s = Sample::weighted(vec![30.0, 10.0, 20.0], vec![3.0, 1.0, 2.0]).unwrap();
        s.sort();
        assert_eq!(s.values, vec![10.0, 20.0, 30.0]);
        assert_eq!(s.weights, Weights::Explicit(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn ties_keep_their_weights_in_order() {
        let mut s = Sample::weighted(vec![2.0, 1.0, 2.0, 1.0], vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        s.sort();
        assert_eq!(s.values, vec![1.0, 1.0, 2.0, 2.0]);
        assert_eq!(s.weights, Weights::Explicit(vec![0.2, 0.4, 0.1, 0.3]));
    }

    #[test]
    fn already_ascending_only_sets_flag() {
        let mut s = Sample::new(vec![1.0_f32, 1.0, 2.0]);
        assert!(!s.sorted);
        s.sort();
        assert!(s.sorted);
        assert_eq!(s.values, vec![1.0, 1.0, 2.0]);
    }

    #[test]
    fn sorted_claim_is_trusted() {
        let mut s = Sample::new(vec![3.0, 1.0, 2.0]).with_sorted(true);
        s.sort();
        assert_eq!(s.values, vec![3.0, 1.0, 2.0]);
        assert!(s.sorted);

        let mut w = Sample::weighted(vec![3.0, 1.0, 2.0], vec![0.3, 0.1, 0.2])
            .unwrap()
            .with_sorted(true);
        w.sort();
        assert_eq!(w.values, vec![3.0, 1.0, 2.0]);
        assert_eq!(w.weights, Weights::Explicit(vec![0.3, 0.1, 0.2]));
    }

    #[test]
    fn sort_chains() {
        let mut s = Sample::new(vec![3.0, 2.0, 1.0]);
        assert_eq!(s.sort().values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn sorted_view_leaves_receiver_alone() {
        let s = Sample::new(vec![3.0, 1.0, 2.0]);
        let view = s.sorted_view();
        assert_eq!(view.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(s.values, vec![3.0, 1.0, 2.0]);
        assert!(!s.sorted);
    }

    #[test]
    fn ascending_is_total() {
        assert_eq!(ascending(&f64::NAN, &f64::NAN), Ordering::Equal);
        assert_eq!(ascending(&f64::NAN, &0.0), Ordering::Less);
        assert_eq!(ascending(&0.0, &f64::NAN), Ordering::Greater);
        assert_eq!(ascending(&1.0, &2.0), Ordering::Less);
    }
}
