//! Axis furniture: gridlines, tick marks and labels, spines, captions, title.

#![allow(clippy::too_many_arguments)]

use super::common::*;
use crate::core::{Axes, AxisState};
use crate::render::UnitMeshes;
use bevy::prelude::*;

const TICK_WIDTH: f32 = 0.8;
const SPINE_WIDTH: f32 = 0.8;
const LABEL_PAD: f32 = 4.0;

/// Major and minor tick positions of one axis within its view limits.
pub struct AxisTicks {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

pub fn axis_ticks(state: &AxisState, lim: [f64; 2], target: usize) -> AxisTicks {
    let inside = |v: &f64| *v >= lim[0] && *v <= lim[1];
    let major: Vec<f64> = match &state.ticks {
        Some(ticks) => ticks.iter().copied().filter(inside).collect(),
        None => auto_ticks(lim[0], lim[1], target),
    };
    let minor = if state.minor_ticks || state.minor_grid.is_some() {
        minor_ticks(&major, lim[0], lim[1])
    } else {
        vec![]
    };
    AxisTicks { major, minor }
}

fn x_ticks(axes: &Axes, view: &DataView) -> AxisTicks {
    axis_ticks(&axes.x, view.x, 8)
}

fn y_ticks(axes: &Axes, view: &DataView) -> AxisTicks {
    axis_ticks(&axes.y, view.y, 6)
}

pub fn draw_grid(
    commands: &mut Commands,
    root: Entity,
    axes: &Axes,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    let mat = materials.add(ColorMaterial::from(Color::srgb(0.69, 0.69, 0.69)));

    if axes.x.visible {
        let ticks = x_ticks(axes, view);
        for (grid, positions) in [
            (axes.x.major_grid, &ticks.major),
            (axes.x.minor_grid, &ticks.minor),
        ] {
            let Some(grid) = grid else { continue };
            for &x in positions {
                let wx = view.world_x(x);
                draw_line(
                    commands,
                    root,
                    unit,
                    &mat,
                    Vec2::new(wx, view.bottom()),
                    Vec2::new(wx, view.top()),
                    grid.width,
                    grid.style,
                    z,
                );
            }
        }
    }

    if axes.y.visible {
        let ticks = y_ticks(axes, view);
        for (grid, positions) in [
            (axes.y.major_grid, &ticks.major),
            (axes.y.minor_grid, &ticks.minor),
        ] {
            let Some(grid) = grid else { continue };
            for &y in positions {
                let wy = view.world_y(y);
                draw_line(
                    commands,
                    root,
                    unit,
                    &mat,
                    Vec2::new(view.left(), wy),
                    Vec2::new(view.right(), wy),
                    grid.width,
                    grid.style,
                    z,
                );
            }
        }
    }
}

/// Outward tick marks and value labels on the bottom and left edges.
pub fn draw_ticks(
    commands: &mut Commands,
    root: Entity,
    axes: &Axes,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    let mat = materials.add(ColorMaterial::from(Color::BLACK));

    if axes.x.visible {
        let state = &axes.x;
        let ticks = x_ticks(axes, view);
        let y0 = view.bottom();

        for &x in &ticks.major {
            let wx = view.world_x(x);
            let mark = Vec2::new(wx, y0 - state.major_tick_length);
            draw_segment(commands, root, unit, &mat, Vec2::new(wx, y0), mark, TICK_WIDTH, z);

            let label = format_tick(x);
            // Rotated labels hang below the tick by half their diagonal.
            let drop = if state.tick_rotation != 0.0 {
                let r = state.tick_rotation.to_radians();
                text_width(&label, state.tick_label_size) * 0.5 * r.sin().abs()
                    + state.tick_label_size * 0.5
            } else {
                state.tick_label_size * 0.6
            };
            draw_text(
                commands,
                root,
                label,
                state.tick_label_size,
                Color::BLACK,
                Vec2::new(wx, mark.y - LABEL_PAD - drop),
                state.tick_rotation,
                z,
            );
        }

        if state.minor_ticks {
            for &x in &ticks.minor {
                let wx = view.world_x(x);
                draw_segment(
                    commands,
                    root,
                    unit,
                    &mat,
                    Vec2::new(wx, y0),
                    Vec2::new(wx, y0 - state.minor_tick_length),
                    TICK_WIDTH * 0.75,
                    z,
                );
            }
        }
    }

    if axes.y.visible {
        let state = &axes.y;
        let ticks = y_ticks(axes, view);
        let x0 = view.left();

        for &y in &ticks.major {
            let wy = view.world_y(y);
            let mark = Vec2::new(x0 - state.major_tick_length, wy);
            draw_segment(commands, root, unit, &mat, Vec2::new(x0, wy), mark, TICK_WIDTH, z);

            let label = format_tick(y);
            let half = text_width(&label, state.tick_label_size) * 0.5;
            draw_text(
                commands,
                root,
                label,
                state.tick_label_size,
                Color::BLACK,
                Vec2::new(mark.x - LABEL_PAD - half, wy),
                state.tick_rotation,
                z,
            );
        }

        if state.minor_ticks {
            for &y in &ticks.minor {
                let wy = view.world_y(y);
                draw_segment(
                    commands,
                    root,
                    unit,
                    &mat,
                    Vec2::new(x0, wy),
                    Vec2::new(x0 - state.minor_tick_length, wy),
                    TICK_WIDTH * 0.75,
                    z,
                );
            }
        }
    }
}

pub fn draw_spines(
    commands: &mut Commands,
    root: Entity,
    axes: &Axes,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    let mat = materials.add(ColorMaterial::from(Color::BLACK));
    let (l, r, b, t) = (view.left(), view.right(), view.bottom(), view.top());

    let spines = [
        (axes.spines.bottom, Vec2::new(l, b), Vec2::new(r, b)),
        (axes.spines.top, Vec2::new(l, t), Vec2::new(r, t)),
        (axes.spines.left, Vec2::new(l, b), Vec2::new(l, t)),
        (axes.spines.right, Vec2::new(r, b), Vec2::new(r, t)),
    ];
    for (shown, a, c) in spines {
        if shown {
            draw_segment(commands, root, unit, &mat, a, c, SPINE_WIDTH, z);
        }
    }
}

/// Axis captions outside the tick labels, and the title block above the data.
pub fn draw_captions(commands: &mut Commands, root: Entity, axes: &Axes, view: &DataView, z: f32) {
    if let (true, Some(label)) = (axes.x.visible, &axes.x.label) {
        let below = axes.x.major_tick_length + axes.x.tick_label_size * 2.6 + LABEL_PAD;
        draw_text(
            commands,
            root,
            label.text.clone(),
            label.size,
            Color::BLACK,
            Vec2::new((view.left() + view.right()) * 0.5, view.bottom() - below),
            0.0,
            z,
        );
    }

    if let (true, Some(label)) = (axes.y.visible, &axes.y.label) {
        let widest = y_ticks(axes, view)
            .major
            .iter()
            .map(|&y| text_width(&format_tick(y), axes.y.tick_label_size))
            .fold(0.0, f32::max);
        let left = axes.y.major_tick_length + widest + LABEL_PAD * 2.0 + label.size * 0.6;
        draw_text(
            commands,
            root,
            label.text.clone(),
            label.size,
            Color::BLACK,
            Vec2::new(view.left() - left, (view.bottom() + view.top()) * 0.5),
            90.0,
            z,
        );
    }

    let mut y = view.top() + 18.0;
    if let Some(desc) = &axes.meta.description {
        draw_text(
            commands,
            root,
            desc.clone(),
            11.0,
            Color::srgb(0.3, 0.3, 0.3),
            Vec2::new((view.left() + view.right()) * 0.5, view.top() + 10.0),
            0.0,
            z,
        );
        y += 14.0;
    }
    if let Some(title) = &axes.meta.title {
        draw_text(
            commands,
            root,
            title.clone(),
            16.0,
            Color::BLACK,
            Vec2::new((view.left() + view.right()) * 0.5, y),
            0.0,
            z,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_ticks_are_clipped_to_view() {
        let state = AxisState {
            ticks: Some(vec![-1.0, 0.0, 2.0, 4.0, 9.0]),
            ..AxisState::default()
        };
        let ticks = axis_ticks(&state, [0.0, 4.0], 8);
        assert_eq!(ticks.major, vec![0.0, 2.0, 4.0]);
        assert!(ticks.minor.is_empty());
    }

    #[test]
    fn minor_positions_follow_minor_ticks_flag() {
        let state = AxisState {
            ticks: Some(vec![0.0, 5.0]),
            minor_ticks: true,
            ..AxisState::default()
        };
        let ticks = axis_ticks(&state, [0.0, 5.0], 8);
        assert_eq!(ticks.minor, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
