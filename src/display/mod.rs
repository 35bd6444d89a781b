//! Tabular summaries of a sample.

use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use num_traits::{Float, FromPrimitive};

use crate::sample::Sample;
use crate::statistics::{Statistic, constant};

/// Descriptive statistics of one sample, computed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<F> {
    /// Number of observations, zero-weighted ones included.
    pub count: usize,
    /// Total weight (equals `count` when unweighted).
    pub weight: F,
    /// (Weighted) sum.
    pub sum: F,
    /// (Weighted) mean.
    pub mean: F,
    /// Sample standard deviation; `None` for weighted samples.
    pub stddev: Option<F>,
    /// Smallest supported value.
    pub min: F,
    /// Largest supported value.
    pub max: F,
    /// 25th percentile.
    pub q1: F,
    /// 50th percentile.
    pub median: F,
    /// 75th percentile.
    pub q3: F,
    /// `q3 - q1`.
    pub iqr: F,
}

/// Computes a [`Summary`]. Order statistics share one sorted copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summarize;

impl<F: Float + FromPrimitive> Statistic<Sample<F>, Summary<F>> for Summarize {
    fn compute(&self, data: &Sample<F>) -> Summary<F> {
        let sorted = data.sorted_view();
        let (min, max) = sorted.bounds();
        let q1 = sorted.percentile(constant(0.25));
        let q3 = sorted.percentile(constant(0.75));

        Summary {
            count: data.len(),
            weight: data.weight(),
            sum: data.sum(),
            mean: data.mean(),
            stddev: data.try_stddev().ok(),
            min,
            max,
            q1,
            median: sorted.percentile(constant(0.5)),
            q3,
            iqr: q3 - q1,
        }
    }
}

impl<F> Summary<F>
where
    F: Float + Display,
{
    /// Render the summary as a two-column table.
    pub fn display(&self) -> String {
        let fmt = |x: F| {
            if x.is_nan() {
                "NaN".to_string()
            } else {
                format!("{x:.4}")
            }
        };

        let rows = [
            ("Count", self.count.to_string()),
            ("Weight", fmt(self.weight)),
            ("Sum", fmt(self.sum)),
            ("Mean", fmt(self.mean)),
            ("Std. dev.", self.stddev.map_or_else(|| "n/a (weighted)".to_string(), fmt)),
            ("Min", fmt(self.min)),
            ("Q1", fmt(self.q1)),
            ("Median", fmt(self.median)),
            ("Q3", fmt(self.q3)),
            ("Max", fmt(self.max)),
            ("IQR", fmt(self.iqr)),
        ];

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Statistic").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
            ]);

        for (name, value) in rows {
            table.add_row(vec![
                Cell::new(name).set_alignment(CellAlignment::Left),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }

        table.to_string()
    }
}

impl<F> Display for Summary<F>
where
    F: Float + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
