//! Descriptive statistics over finite, optionally weighted samples.
//!
//! ```
//! use weighted_sample::{Bounds, Iqr, Mean, Sample};
//!
//! let mut sample = Sample::weighted(vec![30.0, 10.0, 20.0], vec![1.0, 1.0, 0.0]).unwrap();
//! assert_eq!(sample.bounds(), (10.0, 30.0));
//! assert_eq!(sample.mean(), 20.0);
//!
//! sample.sort();
//! let (mean, bounds, iqr) = sample.estimate((Mean, Bounds, Iqr));
//! assert_eq!((mean, bounds, iqr), (20.0, (10.0, 30.0), 20.0));
//! ```
//!
//! Empty samples and samples whose weights are all zero report NaN rather
//! than an error.

mod display;
mod sample;
mod statistics;

pub use crate::display::{Summarize, Summary};
pub use crate::sample::{Sample, SampleError, Weights};
pub use crate::statistics::*;
