use super::style::apply_style_with;
use crate::config::ChartConfig;
use crate::core::{Axes, Bars, Element, Legend, LegendEntry, LegendHandle, VLine};
use crate::stats::{bin_edges, count_into, make_bins, mean, median};
use crate::Result;
use error_stack::ResultExt;

/// Draw order of the reference lines, above bars and grid.
const REFERENCE_Z: i32 = 2;

/// Histogram of `values` over the same bins as [`freq_table`](crate::stats::freq_table),
/// with dashed median and mean lines and the stock look.
///
/// With `show_outlier_legend` the legend gets an extra "Boxplot outliers"
/// marker entry. It is decorative: nothing on this surface is flagged as an
/// outlier.
pub fn render_histogram(
    values: &[f64],
    bin_min: f64,
    bin_max: f64,
    bin_width: f64,
    ax: &mut Axes,
    show_outlier_legend: bool,
) -> Result<()> {
    render_histogram_with(
        values,
        bin_min,
        bin_max,
        bin_width,
        ax,
        show_outlier_legend,
        &ChartConfig::default(),
    )
}

/// [`render_histogram`] with explicit presentation settings.
///
/// Fails with [`StatsError::EmptySequence`](crate::StatsError::EmptySequence)
/// when `values` holds no number and with
/// [`StatsError::TooManyBins`](crate::StatsError::TooManyBins) when the bin
/// width is too small for the range; `ax` is not touched in either case.
pub fn render_histogram_with(
    values: &[f64],
    bin_min: f64,
    bin_max: f64,
    bin_width: f64,
    ax: &mut Axes,
    show_outlier_legend: bool,
    config: &ChartConfig,
) -> Result<()> {
    let style = &config.histogram;

    let med = median(values).attach("histogram reference line")?;
    let avg = mean(values).attach("histogram reference line")?;
    let bins = make_bins(bin_min, bin_max, bin_width).attach("histogram bars")?;

    apply_style_with(ax, &config.axis);

    let edges = bin_edges(&bins);

    if bins.is_empty() {
        tracing::warn!(bin_min, bin_max, bin_width, "histogram has no bins to draw");
    } else {
        let heights = count_into(&bins, values)
            .into_iter()
            .map(|c| c as f64)
            .collect();
        ax.push(Element::Bars(Bars {
            edges: edges.clone(),
            heights,
            fill: style.bar_fill,
            label: None,
        }));
    }

    ax.set_xticks(edges);
    ax.x.tick_rotation = style.tick_rotation;
    ax.axis_below = true;

    ax.push(Element::VLine(VLine {
        x: med,
        line: style.median_line,
        label: Some(style.median_label(med)),
        z_order: REFERENCE_Z,
    }));
    ax.push(Element::VLine(VLine {
        x: avg,
        line: style.mean_line,
        label: Some(style.mean_label(avg)),
        z_order: REFERENCE_Z,
    }));

    ax.set_xlabel(style.x_label.as_str(), style.axis_label_size);
    ax.set_ylabel(style.y_label.as_str(), style.axis_label_size);

    let mut entries = ax.legend_entries();
    if show_outlier_legend {
        entries.push(LegendEntry {
            handle: LegendHandle::Marker(style.outlier_marker),
            label: style.outlier_caption.clone(),
        });
    }
    ax.set_legend(Legend {
        entries,
        font_size: style.legend_font_size,
        loc: style.legend_loc,
        anchor: style.legend_anchor,
    });

    tracing::debug!(
        bins = bins.len(),
        median = med,
        mean = avg,
        show_outlier_legend,
        "rendered histogram"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsError;

    fn vlines(ax: &Axes) -> Vec<&VLine> {
        ax.elements
            .iter()
            .filter_map(|e| match e {
                Element::VLine(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn constant_input_puts_both_lines_on_the_value() {
        let mut ax = Axes::new();
        render_histogram(&[1.0; 5], 0.0, 3.0, 1.0, &mut ax, false).unwrap();

        let lines = vlines(&ax);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.x == 1.0));
        assert_eq!(lines[0].label.as_deref(), Some("Mediana (1.000)"));
        assert_eq!(lines[1].label.as_deref(), Some("Média (1.000)"));
        assert_ne!(lines[0].line.color, lines[1].line.color);
    }

    #[test]
    fn bars_follow_frequency_bins() {
        let mut ax = Axes::new();
        render_histogram(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 5.0], 0.0, 6.0, 2.0, &mut ax, false)
            .unwrap();

        let Some(Element::Bars(bars)) = ax.elements.first() else {
            panic!("expected bars first");
        };
        assert_eq!(bars.edges, vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(bars.heights, vec![1.0, 5.0, 1.0]);
        assert_eq!(bars.midpoints(), vec![1.0, 3.0, 5.0]);
        assert_eq!(bars.label, None);
        assert_eq!(ax.x.ticks.as_deref(), Some(&[0.0, 2.0, 4.0, 6.0][..]));
        assert_eq!(ax.x.tick_rotation, 45.0);
    }

    #[test]
    fn oversized_bin_count_leaves_surface_untouched() {
        let mut ax = Axes::new();
        let err = render_histogram(&[0.5], 0.0, 1.0, 1e-25, &mut ax, false).unwrap_err();
        assert!(matches!(err.current_context(), StatsError::TooManyBins));
        assert_eq!(ax, Axes::new());
    }

    #[test]
    fn empty_input_leaves_surface_untouched() {
        let mut ax = Axes::new();
        let err = render_histogram(&[], 0.0, 6.0, 2.0, &mut ax, true).unwrap_err();
        assert!(matches!(err.current_context(), StatsError::EmptySequence));
        assert_eq!(ax, Axes::new());
    }
}
