//! Shared drawing utilities: data-to-world mapping, tick placement and
//! primitive shapes built from the unit meshes.

#![allow(clippy::too_many_arguments)]

use crate::core::{Axes, Element, LineStyle, MarkerShape};
use crate::render::{FigureRect, UnitMeshes};
use bevy::prelude::*;

/// Fractions of the figure kept free around the data area.
const PAD_LEFT: f32 = 0.12;
const PAD_RIGHT: f32 = 0.06;
const PAD_BOTTOM: f32 = 0.18;
const PAD_TOP: f32 = 0.08;

/// View margin added on each side of the data, as a fraction of its span.
const DATA_MARGIN: f64 = 0.05;

/// Map a plotting z-order onto a world depth. Higher draws on top.
pub fn depth(z_order: f32) -> f32 {
    0.5 + z_order * 0.4
}

/// Data limits of the surface and their placement in world space.
pub struct DataView {
    pub x: [f64; 2],
    pub y: [f64; 2],
    /// World position of the bottom-left corner of the data area
    pub origin: Vec2,
    pub size: Vec2,
}

impl DataView {
    pub fn new(axes: &Axes, rect: &FigureRect) -> Self {
        let (x, y) = data_limits(axes);

        let origin = Vec2::new(
            rect.world_center.x - rect.world_size.x * 0.5 + rect.world_size.x * PAD_LEFT,
            rect.world_center.y - rect.world_size.y * 0.5 + rect.world_size.y * PAD_BOTTOM,
        );
        let size = Vec2::new(
            rect.world_size.x * (1.0 - PAD_LEFT - PAD_RIGHT),
            rect.world_size.y * (1.0 - PAD_BOTTOM - PAD_TOP),
        );

        Self { x, y, origin, size }
    }

    pub fn world_x(&self, x: f64) -> f32 {
        self.origin.x + (((x - self.x[0]) / (self.x[1] - self.x[0])) as f32) * self.size.x
    }

    pub fn world_y(&self, y: f64) -> f32 {
        self.origin.y + (((y - self.y[0]) / (self.y[1] - self.y[0])) as f32) * self.size.y
    }

    pub fn to_world(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(self.world_x(x), self.world_y(y))
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y
    }

    pub fn top(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// World position of a point given in axes fractions (0..1 spans the data area).
    pub fn fraction(&self, fx: f32, fy: f32) -> Vec2 {
        self.origin + Vec2::new(fx * self.size.x, fy * self.size.y)
    }
}

fn padded(lo: f64, hi: f64, sticky_lo: bool) -> [f64; 2] {
    let span = hi - lo;
    if span <= 0.0 {
        return [lo - 0.5, hi + 0.5];
    }
    let lo = if sticky_lo { lo } else { lo - span * DATA_MARGIN };
    [lo, hi + span * DATA_MARGIN]
}

/// View limits: element bounds widened to cover explicit ticks, plus a
/// margin. Bars keep their baseline on the bottom edge.
fn data_limits(axes: &Axes) -> ([f64; 2], [f64; 2]) {
    let (mut min, mut max) = axes.bounds().unwrap_or(([0.0, 0.0], [1.0, 1.0]));

    for (i, ticks) in [&axes.x.ticks, &axes.y.ticks].into_iter().enumerate() {
        for &t in ticks.iter().flatten().filter(|t| t.is_finite()) {
            min[i] = min[i].min(t);
            max[i] = max[i].max(t);
        }
    }

    let bars = axes.elements.iter().any(|e| matches!(e, Element::Bars(_)));
    (
        padded(min[0], max[0], false),
        padded(min[1], max[1], bars && min[1] == 0.0),
    )
}

/// Calculate nice tick step for given range.
pub fn nice_step(range: f64, target_ticks: usize) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let rough = range / target_ticks as f64;
    let exp = rough.log10().floor();
    let base = 10f64.powf(exp);

    let normalized = rough / base;
    let nice = if normalized <= 1.5 {
        1.0
    } else if normalized <= 3.0 {
        2.0
    } else if normalized <= 7.0 {
        5.0
    } else {
        10.0
    };

    nice * base
}

/// Evenly spaced "nice" tick positions inside `[lo, hi]`.
pub fn auto_ticks(lo: f64, hi: f64, target_ticks: usize) -> Vec<f64> {
    let step = nice_step(hi - lo, target_ticks);
    let start = (lo / step).ceil() as i64;
    let end = (hi / step).floor() as i64;
    (start..=end).map(|i| i as f64 * step).collect()
}

/// Minor positions splitting each major interval in five, within `[lo, hi]`.
/// Needs at least two evenly spaced majors.
pub fn minor_ticks(major: &[f64], lo: f64, hi: f64) -> Vec<f64> {
    let [first, second, ..] = major else {
        return vec![];
    };
    let step = (second - first) / 5.0;
    if step <= 0.0 || !step.is_finite() {
        return vec![];
    }

    let k_min = ((lo - first) / step).ceil() as i64;
    let k_max = ((hi - first) / step).floor() as i64;
    if k_max - k_min > 2000 {
        return vec![];
    }

    (k_min..=k_max)
        .filter(|k| k % 5 != 0)
        .map(|k| first + k as f64 * step)
        .collect()
}

/// Format tick value for display.
pub fn format_tick(val: f64) -> String {
    if val.abs() < 0.001 && val != 0.0 {
        format!("{:.1e}", val)
    } else if val.abs() >= 10000.0 {
        format!("{:.1e}", val)
    } else if val.fract().abs() < 1e-9 {
        format!("{:.0}", val)
    } else if val.abs() < 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.1}", val)
    }
}

/// Rough rendered width of a text run, for placing labels without anchors.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.55
}

pub fn material(
    materials: &mut Assets<ColorMaterial>,
    color: crate::core::Color,
) -> Handle<ColorMaterial> {
    materials.add(ColorMaterial::from(Color::from(color)))
}

/// Solid segment from `a` to `b`.
pub fn draw_segment(
    commands: &mut Commands,
    root: Entity,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
    a: Vec2,
    b: Vec2,
    width: f32,
    z: f32,
) {
    let length = a.distance(b);
    if length <= f32::EPSILON {
        return;
    }
    let angle = (b.y - a.y).atan2(b.x - a.x);

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh2d(unit.quad.clone()),
            MeshMaterial2d(mat.clone()),
            Transform {
                translation: ((a + b) * 0.5).extend(z),
                rotation: Quat::from_rotation_z(angle),
                scale: Vec3::new(length, width, 1.0),
                ..default()
            },
        ));
    });
}

/// Segment from `a` to `b` in the given dash pattern.
pub fn draw_line(
    commands: &mut Commands,
    root: Entity,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
    a: Vec2,
    b: Vec2,
    width: f32,
    style: LineStyle,
    z: f32,
) {
    // On/off lengths scale with the line width.
    let (on, off) = match style {
        LineStyle::Solid => {
            draw_segment(commands, root, unit, mat, a, b, width, z);
            return;
        }
        LineStyle::Dashed => (3.7 * width, 1.6 * width),
        LineStyle::Dotted => (1.0 * width, 1.65 * width),
    };
    let (on, off) = (on.max(1.0), off.max(1.0));

    let total = a.distance(b);
    if total <= f32::EPSILON {
        return;
    }
    let dir = (b - a) / total;

    let mut t = 0.0;
    while t < total {
        let end = (t + on).min(total);
        draw_segment(commands, root, unit, mat, a + dir * t, a + dir * end, width, z);
        t += on + off;
    }
}

/// Filled axis-aligned rectangle between two corners.
pub fn draw_rect(
    commands: &mut Commands,
    root: Entity,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
    min: Vec2,
    max: Vec2,
    z: f32,
) {
    let size = (max - min).abs();
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh2d(unit.quad.clone()),
            MeshMaterial2d(mat.clone()),
            Transform {
                translation: ((min + max) * 0.5).extend(z),
                scale: size.extend(1.0),
                ..default()
            },
        ));
    });
}

/// Outline of an axis-aligned rectangle.
pub fn draw_rect_outline(
    commands: &mut Commands,
    root: Entity,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
    min: Vec2,
    max: Vec2,
    width: f32,
    z: f32,
) {
    let corners = [
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
    ];
    for i in 0..4 {
        draw_segment(commands, root, unit, mat, corners[i], corners[(i + 1) % 4], width, z);
    }
}

/// Text centred on `pos`, rotated counter-clockwise by `rotation` degrees.
pub fn draw_text(
    commands: &mut Commands,
    root: Entity,
    text: impl Into<String>,
    font_size: f32,
    color: Color,
    pos: Vec2,
    rotation: f32,
    z: f32,
) {
    let text = text.into();
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Text2d::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(color),
            Transform {
                translation: pos.extend(z),
                rotation: Quat::from_rotation_z(rotation.to_radians()),
                ..default()
            },
        ));
    });
}

/// Marker glyph centred on `pos`; `size` is its diameter in pixels.
pub fn draw_marker(
    commands: &mut Commands,
    root: Entity,
    unit: &UnitMeshes,
    face: &Handle<ColorMaterial>,
    edge: &Handle<ColorMaterial>,
    marker: &crate::core::MarkerStyle,
    pos: Vec2,
    z: f32,
) {
    let (mesh, rotation) = match marker.shape {
        MarkerShape::Circle => (unit.circle.clone(), 0.0),
        MarkerShape::Square => (unit.quad.clone(), 0.0),
        MarkerShape::Diamond => (unit.quad.clone(), std::f32::consts::FRAC_PI_4),
    };
    let outer = marker.size.max(2.0);

    commands.entity(root).with_children(|parent| {
        for (mat, size, dz) in [(edge, outer, 0.0), (face, outer - 2.0, 0.001)] {
            parent.spawn((
                Mesh2d(mesh.clone()),
                MeshMaterial2d(mat.clone()),
                Transform {
                    translation: pos.extend(z + dz),
                    rotation: Quat::from_rotation_z(rotation),
                    scale: Vec3::new(size, size, 1.0),
                    ..default()
                },
            ));
        }
    });
}
