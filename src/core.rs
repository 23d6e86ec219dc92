use crate::stats::BoxStats;
use crate::{Result, StatsError};
use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

/// Common metadata for a plot surface
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the plot
    pub title: Option<String>,
    /// Optional description displayed below the title
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }

    // Short-code colours of the usual plotting palette
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 0.75, 0.75);
    pub const ORANGE: Self = Self::rgb(1.0, 0.647, 0.0);
}

impl From<Color> for bevy::prelude::Color {
    #[inline]
    fn from(c: Color) -> Self {
        bevy::prelude::Color::srgba(c.r, c.g, c.b, c.a)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineProps {
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for LineProps {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            style: LineStyle::Solid,
        }
    }
}

impl LineProps {
    pub const fn new(color: Color, width: f32, style: LineStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub face: Color,
    pub edge: Color,
    /// Marker diameter in points
    pub size: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            shape: MarkerShape::Circle,
            face: Color::CYAN,
            edge: Color::BLACK,
            size: 10.0,
        }
    }
}

/// Face/edge colouring of a filled patch (bars, boxes).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub face: Color,
    pub edge: Option<Color>,
    /// Multiplied into the face alpha
    pub alpha: f32,
}

impl Fill {
    pub fn face_color(&self) -> Color {
        self.face.with_a(self.face.a * self.alpha)
    }
}

/// Which tick family a setting applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Which {
    Major,
    Minor,
    Both,
}

/// Axis selector, `Both` meaning x and y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSel {
    X,
    Y,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub style: LineStyle,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub size: f32,
}

/// Tick, grid and caption state of one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    pub visible: bool,
    pub label: Option<AxisLabel>,
    /// Explicit major tick positions; automatic when `None`
    pub ticks: Option<Vec<f64>>,
    /// Tick label rotation in degrees
    pub tick_rotation: f32,
    pub tick_label_size: f32,
    pub major_tick_length: f32,
    pub minor_tick_length: f32,
    pub minor_ticks: bool,
    pub major_grid: Option<GridStyle>,
    pub minor_grid: Option<GridStyle>,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            visible: true,
            label: None,
            ticks: None,
            tick_rotation: 0.0,
            tick_label_size: 10.0,
            major_tick_length: 3.5,
            minor_tick_length: 2.0,
            minor_ticks: false,
            major_grid: None,
            minor_grid: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spines {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

/// Histogram bars over contiguous edges; `heights.len() + 1 == edges.len()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bars {
    pub edges: Vec<f64>,
    pub heights: Vec<f64>,
    pub fill: Fill,
    pub label: Option<String>,
}

impl Bars {
    /// Bar centres (the mid-aligned positions).
    pub fn midpoints(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) * 0.5).collect()
    }
}

/// Full-height vertical reference line at `x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VLine {
    pub x: f64,
    pub line: LineProps,
    pub label: Option<String>,
    pub z_order: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxGlyph {
    pub stats: BoxStats,
    pub orientation: Orientation,
    /// Category slot the box is centred on
    pub position: f64,
    /// Box thickness as a fraction of one category slot
    pub width: f64,
    pub fill: Fill,
    pub median_line: LineProps,
    /// Mean drawn as a line across the box; hidden when `None`
    pub mean_line: Option<LineProps>,
    pub whisker_line: LineProps,
    pub flier: MarkerStyle,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Bars(Bars),
    VLine(VLine),
    Box(BoxGlyph),
}

impl Element {
    /// Legend label, if this element is meant to show up in a legend.
    /// Empty labels and labels starting with `_` are ignored.
    pub fn legend_label(&self) -> Option<&str> {
        let label = match self {
            Element::Bars(b) => b.label.as_deref(),
            Element::VLine(l) => l.label.as_deref(),
            Element::Box(_) => None,
        }?;
        (!label.is_empty() && !label.starts_with('_')).then_some(label)
    }

    fn legend_handle(&self) -> Option<LegendHandle> {
        match self {
            Element::Bars(b) => Some(LegendHandle::Patch(b.fill)),
            Element::VLine(l) => Some(LegendHandle::Line(l.line)),
            Element::Box(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LegendHandle {
    Line(LineProps),
    Marker(MarkerStyle),
    Patch(Fill),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub handle: LegendHandle,
    pub label: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendLoc {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub font_size: f32,
    /// Which corner of the legend box sits on `anchor`
    pub loc: LegendLoc,
    /// Anchor in axes fractions; values above 1 sit outside the data area
    pub anchor: [f32; 2],
}

/// Caller-owned plot surface.
///
/// Chart functions only change its configuration and push elements; it is
/// never created or dropped on the caller's behalf.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub meta: PlotMeta,
    pub x: AxisState,
    pub y: AxisState,
    pub spines: Spines,
    /// Grid and ticks drawn beneath data elements
    pub axis_below: bool,
    pub elements: Vec<Element>,
    pub legend: Option<Legend>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    fn axes_mut(&mut self, axis: AxisSel) -> Vec<&mut AxisState> {
        match axis {
            AxisSel::X => vec![&mut self.x],
            AxisSel::Y => vec![&mut self.y],
            AxisSel::Both => vec![&mut self.x, &mut self.y],
        }
    }

    pub fn minor_ticks_on(&mut self) {
        self.x.minor_ticks = true;
        self.y.minor_ticks = true;
    }

    pub fn grid(&mut self, which: Which, axis: AxisSel, style: GridStyle) {
        for a in self.axes_mut(axis) {
            if matches!(which, Which::Major | Which::Both) {
                a.major_grid = Some(style);
            }
            if matches!(which, Which::Minor | Which::Both) {
                a.minor_grid = Some(style);
            }
        }
    }

    pub fn tick_label_size(&mut self, axis: AxisSel, size: f32) {
        for a in self.axes_mut(axis) {
            a.tick_label_size = size;
        }
    }

    pub fn tick_length(&mut self, which: Which, axis: AxisSel, length: f32) {
        for a in self.axes_mut(axis) {
            if matches!(which, Which::Major | Which::Both) {
                a.major_tick_length = length;
            }
            if matches!(which, Which::Minor | Which::Both) {
                a.minor_tick_length = length;
            }
        }
    }

    pub fn set_minor_ticks(&mut self, axis: AxisSel, on: bool) {
        for a in self.axes_mut(axis) {
            a.minor_ticks = on;
        }
    }

    pub fn set_xticks(&mut self, ticks: Vec<f64>) {
        self.x.ticks = Some(ticks);
    }

    pub fn set_yticks(&mut self, ticks: Vec<f64>) {
        self.y.ticks = Some(ticks);
    }

    pub fn set_xlabel(&mut self, text: impl Into<String>, size: f32) {
        self.x.label = Some(AxisLabel {
            text: text.into(),
            size,
        });
    }

    pub fn set_ylabel(&mut self, text: impl Into<String>, size: f32) {
        self.y.label = Some(AxisLabel {
            text: text.into(),
            size,
        });
    }

    pub fn hide_spines(&mut self) {
        self.spines = Spines {
            top: false,
            bottom: false,
            left: false,
            right: false,
        };
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Handles and labels of every element carrying a legend label, in draw order.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.elements
            .iter()
            .filter_map(|e| {
                let label = e.legend_label()?;
                Some(LegendEntry {
                    handle: e.legend_handle()?,
                    label: label.to_string(),
                })
            })
            .collect()
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Data extent over every element, `([xmin, ymin], [xmax, ymax])`.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        let mut include = |x: f64, y: f64| {
            if x.is_finite() && y.is_finite() {
                min[0] = min[0].min(x);
                min[1] = min[1].min(y);
                max[0] = max[0].max(x);
                max[1] = max[1].max(y);
            }
        };

        for e in &self.elements {
            match e {
                Element::Bars(b) => {
                    for (w, &h) in b.edges.windows(2).zip(&b.heights) {
                        include(w[0], 0.0);
                        include(w[1], h);
                    }
                }
                // Vertical lines span whatever y range the rest establishes.
                Element::VLine(_) => {}
                Element::Box(g) => {
                    let (lo, hi) = g.stats.extent();
                    let half = g.width * 0.5;
                    let (a, b) = (g.position - half, g.position + half);
                    match g.orientation {
                        Orientation::Horizontal => {
                            include(lo, a);
                            include(hi, b);
                        }
                        Orientation::Vertical => {
                            include(a, lo);
                            include(b, hi);
                        }
                    }
                }
            }
        }

        // Reference lines only stretch x.
        let any_y = min[1].is_finite();
        for e in &self.elements {
            if let Element::VLine(l) = e {
                if l.x.is_finite() && any_y {
                    min[0] = min[0].min(l.x);
                    max[0] = max[0].max(l.x);
                }
            }
        }

        (min[0].is_finite() && min[1].is_finite()).then_some((min, max))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).change_context(StatsError::Serialization)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).change_context(StatsError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(label: &str) -> Element {
        Element::VLine(VLine {
            x: 1.0,
            line: LineProps::default(),
            label: Some(label.to_string()),
            z_order: 2,
        })
    }

    #[test]
    fn grid_targets_requested_axes() {
        let mut ax = Axes::new();
        let style = GridStyle {
            style: LineStyle::Dotted,
            width: 1.0,
        };
        ax.grid(Which::Minor, AxisSel::X, style);
        assert_eq!(ax.x.minor_grid, Some(style));
        assert_eq!(ax.y.minor_grid, None);
        assert_eq!(ax.x.major_grid, None);
    }

    #[test]
    fn legend_skips_hidden_labels() {
        let mut ax = Axes::new();
        ax.push(line("shown"));
        ax.push(line(""));
        ax.push(line("_hidden"));
        let labels: Vec<_> = ax.legend_entries().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["shown"]);
    }

    #[test]
    fn bounds_cover_bars_and_lines() {
        let mut ax = Axes::new();
        assert!(ax.bounds().is_none());

        ax.push(Element::Bars(Bars {
            edges: vec![0.0, 2.0, 4.0],
            heights: vec![3.0, 1.0],
            fill: Fill {
                face: Color::GREEN,
                edge: None,
                alpha: 1.0,
            },
            label: None,
        }));
        let mut l = line("x");
        if let Element::VLine(v) = &mut l {
            v.x = 7.0;
        }
        ax.push(l);

        assert_eq!(ax.bounds(), Some(([0.0, 0.0], [7.0, 3.0])));
    }

    #[test]
    fn survives_json_round_trip() {
        let mut ax = Axes::new();
        ax.set_xlabel("Volume / mL", 15.0);
        ax.push(line("Média (1.000)"));
        let back = Axes::from_json(&ax.to_json().unwrap()).unwrap();
        assert_eq!(back, ax);
    }
}
