//! Presentation settings.
//!
//! Every colour, width, size and caption the chart functions use lives here.
//! `Default` reproduces the stock look; all structs deserialize with per-field
//! defaults so a JSON override only needs the keys it changes.

use crate::core::{Color, Fill, LegendLoc, LineProps, LineStyle, MarkerShape, MarkerStyle};
use crate::{Result, StatsError};
use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

/// Display names of the frequency table columns. Cosmetic only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub bins: String,
    pub count: String,
    pub count_pct: String,
    pub cumulative_count: String,
    pub cumulative_pct: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            bins: "Bins".into(),
            count: "Count".into(),
            count_pct: "Count / %".into(),
            cumulative_count: "Cumulative count".into(),
            cumulative_pct: "Cumulative count / %".into(),
        }
    }
}

impl ColumnNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bins(mut self, name: impl Into<String>) -> Self {
        self.bins = name.into();
        self
    }

    pub fn count(mut self, name: impl Into<String>) -> Self {
        self.count = name.into();
        self
    }

    pub fn count_pct(mut self, name: impl Into<String>) -> Self {
        self.count_pct = name.into();
        self
    }

    pub fn cumulative_count(mut self, name: impl Into<String>) -> Self {
        self.cumulative_count = name.into();
        self
    }

    pub fn cumulative_pct(mut self, name: impl Into<String>) -> Self {
        self.cumulative_pct = name.into();
        self
    }

    /// Names in table order.
    pub fn headers(&self) -> [&str; 5] {
        [
            self.bins.as_str(),
            self.count.as_str(),
            self.count_pct.as_str(),
            self.cumulative_count.as_str(),
            self.cumulative_pct.as_str(),
        ]
    }
}

/// Grid and tick look shared by every chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub grid_style: LineStyle,
    pub grid_width: f32,
    pub tick_label_size: f32,
    pub major_tick_length: f32,
    pub minor_tick_length: f32,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            grid_style: LineStyle::Dotted,
            grid_width: 1.0,
            tick_label_size: 14.0,
            major_tick_length: 6.0,
            minor_tick_length: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramStyle {
    pub bar_fill: Fill,
    /// Tick label rotation on the x axis, degrees
    pub tick_rotation: f32,
    pub median_line: LineProps,
    pub mean_line: LineProps,
    pub median_caption: String,
    pub mean_caption: String,
    /// Decimal places in the median/mean legend labels
    pub precision: usize,
    pub x_label: String,
    pub y_label: String,
    pub axis_label_size: f32,
    pub outlier_marker: MarkerStyle,
    pub outlier_caption: String,
    pub legend_font_size: f32,
    pub legend_loc: LegendLoc,
    pub legend_anchor: [f32; 2],
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            bar_fill: Fill {
                face: Color::GREEN,
                edge: Some(Color::BLACK),
                alpha: 0.6,
            },
            tick_rotation: 45.0,
            median_line: LineProps::new(Color::BLUE, 2.0, LineStyle::Dashed),
            mean_line: LineProps::new(Color::ORANGE, 2.0, LineStyle::Dashed),
            median_caption: "Mediana".into(),
            mean_caption: "Média".into(),
            precision: 3,
            x_label: "Volume / mL".into(),
            y_label: "Frequência".into(),
            axis_label_size: 15.0,
            outlier_marker: MarkerStyle {
                shape: MarkerShape::Circle,
                face: Color::CYAN,
                edge: Color::BLACK,
                size: 10.0,
            },
            outlier_caption: "Boxplot outliers".into(),
            legend_font_size: 12.0,
            legend_loc: LegendLoc::UpperLeft,
            legend_anchor: [0.75, 1.0],
        }
    }
}

impl HistogramStyle {
    pub fn median_label(&self, value: f64) -> String {
        format!("{} ({:.*})", self.median_caption, self.precision, value)
    }

    pub fn mean_label(&self, value: f64) -> String {
        format!("{} ({:.*})", self.mean_caption, self.precision, value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxplotStyle {
    pub box_fill: Fill,
    pub median_line: LineProps,
    pub mean_line: LineProps,
    pub whisker_line: LineProps,
    pub flier: MarkerStyle,
    /// Whisker reach in interquartile ranges
    pub whis: f64,
    pub width: f64,
    pub category_label: String,
}

impl Default for BoxplotStyle {
    fn default() -> Self {
        Self {
            box_fill: Fill {
                face: Color::CYAN,
                edge: Some(Color::BLACK),
                alpha: 0.5,
            },
            median_line: LineProps::new(Color::BLUE, 2.0, LineStyle::Dashed),
            mean_line: LineProps::new(Color::ORANGE, 2.0, LineStyle::Dashed),
            whisker_line: LineProps::default(),
            flier: MarkerStyle {
                shape: MarkerShape::Circle,
                face: Color::CYAN,
                edge: Color::BLACK,
                size: 10.0,
            },
            whis: 1.5,
            width: 0.95,
            category_label: String::new(),
        }
    }
}

/// Everything the chart functions read, bundled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub axis: AxisStyle,
    pub histogram: HistogramStyle,
    pub boxplot: BoxplotStyle,
    pub columns: ColumnNames,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .change_context(StatsError::Serialization)
            .attach("invalid chart configuration")
    }

    pub fn axis(mut self, axis: AxisStyle) -> Self {
        self.axis = axis;
        self
    }

    pub fn histogram(mut self, histogram: HistogramStyle) -> Self {
        self.histogram = histogram;
        self
    }

    pub fn boxplot(mut self, boxplot: BoxplotStyle) -> Self {
        self.boxplot = boxplot;
        self
    }

    pub fn columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Replace both histogram axis captions.
    pub fn captions(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.histogram.x_label = x_label.into();
        self.histogram.y_label = y_label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_configured_precision() {
        let style = HistogramStyle::default();
        assert_eq!(style.median_label(1.0), "Mediana (1.000)");
        assert_eq!(style.mean_label(2.34567), "Média (2.346)");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = ChartConfig::from_json(
            r#"{ "histogram": { "x_label": "Mass / g" }, "columns": { "count": "n" } }"#,
        )
        .unwrap();

        assert_eq!(cfg.histogram.x_label, "Mass / g");
        assert_eq!(cfg.histogram.y_label, "Frequência");
        assert_eq!(cfg.columns.count, "n");
        assert_eq!(cfg.columns.bins, "Bins");
        assert_eq!(cfg.axis, AxisStyle::default());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ChartConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err.current_context(), StatsError::Serialization));
    }
}
