//! Frequency table: per-bin absolute and cumulative counts and percentages.

use super::bins::{Bin, count_into, make_bins};
use crate::config::{ChartConfig, ColumnNames};
use crate::{Result, StatsError};
use error_stack::{Report, ResultExt};
use serde::Serialize;
use std::fmt;
use tabled::builder::Builder;

/// Round half-to-even at two decimals, the way array libraries round.
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FreqRow {
    pub bin: Bin,
    pub count: usize,
    /// `100 * count / total`, rounded to two decimals
    pub count_pct: f64,
    pub cumulative_count: usize,
    /// Running sum of the *rounded* `count_pct` values.
    ///
    /// Rounding error accumulates, so the last row can land slightly off 100
    /// (e.g. 100.01) and need not equal `100 * cumulative_count / total`.
    pub cumulative_pct: f64,
}

/// Frequency report, one row per bin in ascending order (zero-count bins included).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FreqTable {
    names: ColumnNames,
    rows: Vec<FreqRow>,
}

impl FreqTable {
    /// Builder over `values`. The range starts out empty, so [`FreqTableBuilder::build`]
    /// fails with [`StatsError::EmptyRange`] unless [`FreqTableBuilder::range`] is set.
    pub fn builder(values: &[f64]) -> FreqTableBuilder<'_> {
        FreqTableBuilder::new(values)
    }

    pub fn rows(&self) -> &[FreqRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Observations that landed in some bin.
    pub fn total(&self) -> usize {
        self.rows.last().map_or(0, |r| r.cumulative_count)
    }

    pub fn column_names(&self) -> &ColumnNames {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FreqRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a FreqTable {
    type Item = &'a FreqRow;
    type IntoIter = std::slice::Iter<'a, FreqRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for FreqTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(self.names.headers().map(String::from));
        for row in &self.rows {
            builder.push_record([
                row.bin.to_string(),
                row.count.to_string(),
                format!("{:.2}", row.count_pct),
                row.cumulative_count.to_string(),
                format!("{:.2}", row.cumulative_pct),
            ]);
        }
        write!(f, "{}", builder.build())
    }
}

/// Frequency table of `values` over `[bin_min, bin_max)` in steps of
/// `bin_width`, with the default column names.
///
/// A partial last bin is dropped, so values past the last whole bin are not
/// counted; see [`freq_table_with`].
pub fn freq_table(values: &[f64], bin_min: f64, bin_max: f64, bin_width: f64) -> Result<FreqTable> {
    freq_table_with(values, bin_min, bin_max, bin_width, ColumnNames::default())
}

/// [`freq_table`] with custom column names.
///
/// Observations outside every bin (and NaN) are left out of both the counts
/// and the percentage denominator. When `bin_width` does not divide the range,
/// the partial last bin is dropped (see [`make_bins`]), so values in
/// `[last upper edge, bin_max)` are not counted either and the last
/// `cumulative_count` can be smaller than the number of values in
/// `[bin_min, bin_max)`.
///
/// Fails with [`StatsError::EmptyRange`] when nothing is left to divide by and
/// with [`StatsError::TooManyBins`] when the width is too small for the range.
pub fn freq_table_with(
    values: &[f64],
    bin_min: f64,
    bin_max: f64,
    bin_width: f64,
    names: ColumnNames,
) -> Result<FreqTable> {
    let bins = make_bins(bin_min, bin_max, bin_width).attach("frequency table")?;
    let counts = count_into(&bins, values);
    let total: usize = counts.iter().sum();

    if total == 0 {
        return Err(Report::new(StatsError::EmptyRange).attach(format!(
            "bin_min={bin_min}, bin_max={bin_max}, bin_width={bin_width}, bins={}, observations={}",
            bins.len(),
            values.len()
        )));
    }

    let mut rows = Vec::with_capacity(bins.len());
    let mut cumulative_count = 0usize;
    let mut cumulative_pct = 0.0f64;

    for (bin, count) in bins.into_iter().zip(counts) {
        let count_pct = round2(100.0 * count as f64 / total as f64);
        cumulative_count += count;
        cumulative_pct += count_pct;

        rows.push(FreqRow {
            bin,
            count,
            count_pct,
            cumulative_count,
            cumulative_pct,
        });
    }

    tracing::debug!(
        bins = rows.len(),
        total,
        excluded = values.len() - total,
        "built frequency table"
    );

    Ok(FreqTable { names, rows })
}

/// Fluent front end over [`freq_table_with`].
pub struct FreqTableBuilder<'a> {
    values: &'a [f64],
    bin_min: f64,
    bin_max: f64,
    bin_width: f64,
    names: ColumnNames,
}

impl<'a> FreqTableBuilder<'a> {
    fn new(values: &'a [f64]) -> Self {
        Self {
            values,
            bin_min: 0.0,
            bin_max: 0.0,
            bin_width: 1.0,
            names: ColumnNames::default(),
        }
    }

    pub fn range(mut self, bin_min: f64, bin_max: f64) -> Self {
        self.bin_min = bin_min;
        self.bin_max = bin_max;
        self
    }

    pub fn width(mut self, bin_width: f64) -> Self {
        self.bin_width = bin_width;
        self
    }

    pub fn names(mut self, names: ColumnNames) -> Self {
        self.names = names;
        self
    }

    /// Take the column names from a chart configuration.
    pub fn config(self, config: &ChartConfig) -> Self {
        self.names(config.columns.clone())
    }

    pub fn build(self) -> Result<FreqTable> {
        freq_table_with(
            self.values,
            self.bin_min,
            self.bin_max,
            self.bin_width,
            self.names,
        )
    }
}
