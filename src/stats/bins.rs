use crate::{Result, StatsError};
use error_stack::Report;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative slack (in units of `bin_width`) when comparing the last upper edge
/// against `bin_max`. Absorbs `min + n * width` accumulation error.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Upper limit on the number of bins one parameter set may produce.
pub const MAX_BINS: usize = 1_000_000;

/// Half-open interval `[lower, upper)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
}

impl Bin {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lower <= v && v < self.upper
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// Build the bin sequence for `(bin_min, bin_max, bin_width)`.
///
/// Lower bounds follow the `arange` rule: `bin_min + i * bin_width` for every
/// `i` whose lower bound is still below `bin_max`. A trailing bin whose upper
/// edge would overshoot `bin_max` is dropped, so every bin lies inside
/// `[bin_min, bin_max)`. An upper edge within rounding distance of `bin_max` is
/// snapped onto it.
///
/// Degenerate parameters (non-finite values, `bin_width <= 0`,
/// `bin_min >= bin_max`) yield no bins. A width so small that the range would
/// need more than [`MAX_BINS`] bins fails with [`StatsError::TooManyBins`].
pub fn make_bins(bin_min: f64, bin_max: f64, bin_width: f64) -> Result<Vec<Bin>> {
    let finite = bin_min.is_finite() && bin_max.is_finite() && bin_width.is_finite();
    if !finite || bin_width <= 0.0 || bin_min >= bin_max {
        return Ok(vec![]);
    }

    let count = ((bin_max - bin_min) / bin_width).ceil();
    if !count.is_finite() || count > MAX_BINS as f64 {
        return Err(Report::new(StatsError::TooManyBins).attach(format!(
            "bin_min={bin_min}, bin_max={bin_max}, bin_width={bin_width}, limit={MAX_BINS}"
        )));
    }
    let n = count as usize;
    let tol = bin_width * EDGE_TOLERANCE;

    let mut bins = Vec::with_capacity(n);
    for i in 0..n {
        let lower = bin_min + i as f64 * bin_width;
        let upper = bin_min + (i + 1) as f64 * bin_width;

        if upper > bin_max + tol {
            break;
        }

        let upper = if (upper - bin_max).abs() <= tol {
            bin_max
        } else {
            upper
        };
        bins.push(Bin::new(lower, upper));
    }

    tracing::trace!(bin_min, bin_max, bin_width, bins = bins.len(), "generated bins");
    Ok(bins)
}

/// Edges of a contiguous bin sequence: every lower bound plus the last upper bound.
pub fn bin_edges(bins: &[Bin]) -> Vec<f64> {
    let mut edges: Vec<f64> = bins.iter().map(|b| b.lower).collect();
    if let Some(last) = bins.last() {
        edges.push(last.upper);
    }
    edges
}

/// Index of the bin holding `v`, if any. `bins` must be sorted and contiguous.
pub(crate) fn locate(bins: &[Bin], v: f64) -> Option<usize> {
    let i = bins.partition_point(|b| b.lower <= v);
    (i > 0 && bins[i - 1].contains(v)).then(|| i - 1)
}

/// Per-bin observation counts. NaN and out-of-range values are skipped.
pub(crate) fn count_into(bins: &[Bin], values: &[f64]) -> Vec<usize> {
    let mut counts = vec![0usize; bins.len()];
    for &v in values {
        if let Some(i) = locate(bins, v) {
            counts[i] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn exact_fit_keeps_last_bin() {
        let bins = make_bins(0.0, 6.0, 2.0).unwrap();
        assert_eq!(
            bins,
            vec![Bin::new(0.0, 2.0), Bin::new(2.0, 4.0), Bin::new(4.0, 6.0)]
        );
    }

    #[test]
    fn overshooting_last_bin_is_dropped() {
        let bins = make_bins(0.0, 5.0, 2.0).unwrap();
        assert_eq!(bins, vec![Bin::new(0.0, 2.0), Bin::new(2.0, 4.0)]);
    }

    #[test]
    fn fractional_width_snaps_last_edge() {
        let bins = make_bins(0.0, 1.0, 0.1).unwrap();
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.last().unwrap().upper, 1.0);
    }

    #[rstest]
    #[case::zero_width(0.0, 6.0, 0.0)]
    #[case::negative_width(0.0, 6.0, -1.0)]
    #[case::inverted_range(6.0, 0.0, 2.0)]
    #[case::empty_range(3.0, 3.0, 1.0)]
    #[case::nan_width(0.0, 6.0, f64::NAN)]
    fn degenerate_parameters_produce_no_bins(
        #[case] min: f64,
        #[case] max: f64,
        #[case] width: f64,
    ) {
        assert!(make_bins(min, max, width).unwrap().is_empty());
    }

    #[rstest]
    #[case::subnormal_width(0.0, 1.0, 1e-25)]
    #[case::wide_range(0.0, 1e12, 1.0)]
    #[case::just_over_limit(0.0, (MAX_BINS + 1) as f64, 1.0)]
    fn oversized_bin_counts_are_rejected(#[case] min: f64, #[case] max: f64, #[case] width: f64) {
        let err = make_bins(min, max, width).unwrap_err();
        assert!(matches!(err.current_context(), StatsError::TooManyBins));
    }

    #[test]
    fn limit_itself_is_accepted() {
        let bins = make_bins(0.0, MAX_BINS as f64, 1.0).unwrap();
        assert_eq!(bins.len(), MAX_BINS);
    }

    #[test]
    fn edges_close_the_sequence() {
        let bins = make_bins(0.0, 6.0, 2.0).unwrap();
        assert_eq!(bin_edges(&bins), vec![0.0, 2.0, 4.0, 6.0]);
        assert!(bin_edges(&[]).is_empty());
    }

    #[test]
    fn counts_respect_half_open_intervals() {
        let bins = make_bins(0.0, 6.0, 2.0).unwrap();
        let counts = count_into(&bins, &[0.0, 1.999, 2.0, 5.999, 6.0, -0.1, f64::NAN]);
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn bin_label_is_half_open() {
        assert_eq!(Bin::new(0.0, 2.5).to_string(), "[0, 2.5)");
    }
}
