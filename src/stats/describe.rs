use crate::{Result, StatsError};
use error_stack::Report;
use serde::{Deserialize, Serialize};

/// Non-NaN observations in ascending order.
fn sorted_observations(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean, skipping NaN.
pub fn mean(values: &[f64]) -> Result<f64> {
    let (sum, n) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));

    if n == 0 {
        return Err(Report::new(StatsError::EmptySequence).attach("mean"));
    }
    Ok(sum / n as f64)
}

/// Median, skipping NaN. Even counts average the two middle observations.
pub fn median(values: &[f64]) -> Result<f64> {
    let sorted = sorted_observations(values);
    if sorted.is_empty() {
        return Err(Report::new(StatsError::EmptySequence).attach("median"));
    }
    Ok(quantile_sorted(&sorted, 0.5))
}

/// Quantile `q` in `[0, 1]` of an ascending, non-empty slice, interpolating
/// linearly between the closest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Summary behind a single box-and-whisker glyph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest observation not below `q1 - whis * iqr`.
    pub whisker_low: f64,
    /// Largest observation not above `q3 + whis * iqr`.
    pub whisker_high: f64,
    /// Observations beyond the whiskers, ascending.
    pub fliers: Vec<f64>,
}

impl BoxStats {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Smallest and largest value the glyph reaches, fliers included.
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.fliers.first().copied().unwrap_or(self.whisker_low);
        let hi = self.fliers.last().copied().unwrap_or(self.whisker_high);
        (lo.min(self.whisker_low), hi.max(self.whisker_high))
    }
}

/// Box-plot statistics with whiskers reaching `whis` interquartile ranges past
/// the box (1.5 is the conventional choice).
pub fn box_stats(values: &[f64], whis: f64) -> Result<BoxStats> {
    let sorted = sorted_observations(values);
    if sorted.is_empty() {
        return Err(Report::new(StatsError::EmptySequence).attach("box statistics"));
    }

    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;

    let lo_limit = q1 - whis * iqr;
    let hi_limit = q3 + whis * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= lo_limit)
        .unwrap_or(q1)
        .min(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= hi_limit)
        .unwrap_or(q3)
        .max(q3);

    let fliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v < whisker_low || v > whisker_high)
        .collect();

    Ok(BoxStats {
        count: sorted.len(),
        mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        fliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_median_skip_nan() {
        let v = [1.0, f64::NAN, 2.0, 3.0, 10.0];
        assert!((mean(&v).unwrap() - 4.0).abs() < 1e-12);
        assert!((median(&v).unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_is_an_error() {
        for err in [mean(&[]).unwrap_err(), median(&[f64::NAN]).unwrap_err()] {
            assert!(matches!(err.current_context(), StatsError::EmptySequence));
        }
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&sorted, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile_sorted(&sorted, 0.75) - 3.25).abs() < 1e-12);
        assert_eq!(quantile_sorted(&[7.0], 0.9), 7.0);
    }

    #[test]
    fn box_stats_split_whiskers_and_fliers() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let s = box_stats(&v, 1.5).unwrap();

        assert!((s.q1 - 3.25).abs() < 1e-12);
        assert!((s.median - 5.5).abs() < 1e-12);
        assert!((s.q3 - 7.75).abs() < 1e-12);
        assert_eq!(s.whisker_low, 1.0);
        assert_eq!(s.whisker_high, 9.0);
        assert_eq!(s.fliers, vec![100.0]);
        assert_eq!(s.extent(), (1.0, 100.0));
        assert!((s.mean - 14.5).abs() < 1e-12);
    }

    #[test]
    fn constant_input_collapses_the_box() {
        let s = box_stats(&[2.0; 5], 1.5).unwrap();
        assert_eq!((s.q1, s.median, s.q3), (2.0, 2.0, 2.0));
        assert_eq!((s.whisker_low, s.whisker_high), (2.0, 2.0));
        assert!(s.fliers.is_empty());
    }
}
