//! Numeric side of the crate: bin generation, descriptive statistics and the
//! frequency table.

mod bins;
mod describe;
mod freq;

pub use bins::{Bin, MAX_BINS, bin_edges, make_bins};
pub(crate) use bins::count_into;
pub use describe::{BoxStats, box_stats, mean, median, quantile_sorted};
pub use freq::{FreqRow, FreqTable, FreqTableBuilder, freq_table, freq_table_with};
