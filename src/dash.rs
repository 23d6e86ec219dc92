use crate::Result;
use crate::charts::{render_boxplot_with, render_histogram_with};
use crate::config::ChartConfig;
use crate::core::Axes;
use error_stack::Report;

pub fn axes() -> AxesBuilder {
    AxesBuilder {
        axes: Axes::new(),
        config: ChartConfig::default(),
        error: None,
    }
}

/// Fluent front end over the chart functions.
///
/// The first failing chart call is kept and returned by [`AxesBuilder::build`];
/// later calls are skipped.
pub struct AxesBuilder {
    axes: Axes,
    config: ChartConfig,
    error: Option<Report<crate::StatsError>>,
}

impl AxesBuilder {
    /// Presentation settings used by every chart added afterwards
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the plot title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.axes.meta.title = Some(title.into());
        self
    }

    /// Set the plot description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.axes.meta.description = Some(desc.into());
        self
    }

    fn chart<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Axes, &ChartConfig) -> Result<()>,
    {
        if self.error.is_none() {
            if let Err(e) = f(&mut self.axes, &self.config) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn histogram(
        self,
        values: &[f64],
        bin_min: f64,
        bin_max: f64,
        bin_width: f64,
        show_outlier_legend: bool,
    ) -> Self {
        self.chart(|ax, cfg| {
            render_histogram_with(
                values,
                bin_min,
                bin_max,
                bin_width,
                ax,
                show_outlier_legend,
                cfg,
            )
        })
    }

    pub fn boxplot(self, values: &[f64]) -> Self {
        self.chart(|ax, cfg| render_boxplot_with(values, ax, cfg))
    }

    /// Get the built surface without showing it
    pub fn build(self) -> Result<Axes> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.axes),
        }
    }

    /// Show the surface in a native window (blocks until it is closed)
    pub fn run_local(self) -> Result<()> {
        let axes = self.build()?;
        crate::runtime::show(axes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsError;
    use crate::core::Element;

    #[test]
    fn builds_titled_histogram() {
        let ax = axes()
            .title("Pipette check")
            .histogram(&[1.0, 2.0, 2.5], 0.0, 3.0, 1.0, true)
            .build()
            .unwrap();

        assert_eq!(ax.meta.title.as_deref(), Some("Pipette check"));
        assert!(matches!(ax.elements[0], Element::Bars(_)));
        assert_eq!(ax.legend.map(|l| l.entries.len()), Some(3));
    }

    #[test]
    fn keeps_first_error() {
        let err = axes()
            .boxplot(&[])
            .histogram(&[1.0], 0.0, 2.0, 1.0, false)
            .build()
            .unwrap_err();
        assert!(matches!(err.current_context(), StatsError::EmptySequence));
    }

    #[test]
    fn config_flows_into_charts() {
        let ax = axes()
            .config(ChartConfig::new().captions("Mass / g", "Count"))
            .histogram(&[1.0, 2.0], 0.0, 3.0, 1.0, false)
            .build()
            .unwrap();
        assert_eq!(ax.x.label.map(|l| l.text).as_deref(), Some("Mass / g"));
        assert_eq!(ax.y.label.map(|l| l.text).as_deref(), Some("Count"));
    }
}
