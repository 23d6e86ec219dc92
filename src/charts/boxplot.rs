use super::style::apply_style_with;
use crate::config::ChartConfig;
use crate::core::{Axes, BoxGlyph, Element, Orientation};
use crate::stats::box_stats;
use crate::Result;
use error_stack::ResultExt;

/// Horizontal box-and-whisker plot of `values` with the stock look.
pub fn render_boxplot(values: &[f64], ax: &mut Axes) -> Result<()> {
    render_boxplot_with(values, ax, &ChartConfig::default())
}

/// [`render_boxplot`] with explicit presentation settings.
///
/// The plot carries a single unlabelled category, so every spine and the
/// whole y axis are hidden.
pub fn render_boxplot_with(values: &[f64], ax: &mut Axes, config: &ChartConfig) -> Result<()> {
    let style = &config.boxplot;
    let stats = box_stats(values, style.whis).attach("boxplot")?;

    apply_style_with(ax, &config.axis);

    tracing::debug!(
        q1 = stats.q1,
        median = stats.median,
        q3 = stats.q3,
        fliers = stats.fliers.len(),
        "rendered boxplot"
    );

    ax.push(Element::Box(BoxGlyph {
        stats,
        orientation: Orientation::Horizontal,
        position: 1.0,
        width: style.width,
        fill: style.box_fill,
        median_line: style.median_line,
        mean_line: Some(style.mean_line),
        whisker_line: style.whisker_line,
        flier: style.flier,
        label: style.category_label.clone(),
    }));
    ax.set_yticks(vec![1.0]);

    ax.hide_spines();
    ax.y.visible = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, LineStyle, Spines};
    use crate::StatsError;

    #[test]
    fn draws_one_horizontal_box_without_frame() {
        let mut ax = Axes::new();
        render_boxplot(&[1.0, 2.0, 3.0, 4.0, 5.0, 40.0], &mut ax).unwrap();

        assert_eq!(ax.elements.len(), 1);
        let Element::Box(glyph) = &ax.elements[0] else {
            panic!("expected a box");
        };
        assert_eq!(glyph.orientation, Orientation::Horizontal);
        assert_eq!(glyph.width, 0.95);
        assert_eq!(glyph.label, "");
        assert_eq!(glyph.stats.fliers, vec![40.0]);
        assert_eq!(glyph.median_line.color, Color::BLUE);
        assert_eq!(glyph.median_line.style, LineStyle::Dashed);
        assert_eq!(glyph.mean_line.map(|l| l.color), Some(Color::ORANGE));
        assert_eq!(glyph.flier.face, Color::CYAN);

        assert!(!ax.y.visible);
        assert!(ax.x.visible);
        assert_eq!(
            ax.spines,
            Spines {
                top: false,
                bottom: false,
                left: false,
                right: false
            }
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut ax = Axes::new();
        let err = render_boxplot(&[f64::NAN], &mut ax).unwrap_err();
        assert!(matches!(err.current_context(), StatsError::EmptySequence));
        assert!(ax.elements.is_empty());
    }
}
