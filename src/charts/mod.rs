//! Chart functions drawing onto a caller-owned [`Axes`](crate::core::Axes).
//!
//! - `style`: shared grid and tick look
//! - `histogram`: binned histogram with median/mean reference lines
//! - `boxplot`: single horizontal box-and-whisker plot

mod boxplot;
mod histogram;
mod style;

pub use boxplot::{render_boxplot, render_boxplot_with};
pub use histogram::{render_histogram, render_histogram_with};
pub use style::{apply_style, apply_style_with};
