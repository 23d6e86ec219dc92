//! Turns an [`Axes`] surface into 2D meshes and text under one root entity.

mod common;
mod elements;
mod frame;
mod legend;

pub use common::{DataView, auto_ticks, format_tick, minor_ticks, nice_step};
pub use frame::{AxisTicks, axis_ticks};

use crate::core::{Axes, Element};
use crate::render::{FigureRect, UnitMeshes};
use bevy::prelude::*;
use common::depth;

fn z_order(element: &Element) -> f32 {
    match element {
        Element::Bars(_) | Element::Box(_) => 1.0,
        Element::VLine(l) => l.z_order as f32,
    }
}

pub fn draw_axes(
    commands: &mut Commands,
    root: Entity,
    axes: &Axes,
    rect: &FigureRect,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
) {
    let view = DataView::new(axes, rect);

    let grid_z = if axes.axis_below { depth(0.5) } else { depth(2.5) };
    frame::draw_grid(commands, root, axes, &view, unit, materials, grid_z);

    // Stable sort keeps insertion order among equal z-orders.
    let mut order: Vec<&Element> = axes.elements.iter().collect();
    order.sort_by(|a, b| z_order(a).total_cmp(&z_order(b)));

    for (i, element) in order.into_iter().enumerate() {
        let z = depth(z_order(element)) + i as f32 * 0.01;
        match element {
            Element::Bars(b) => elements::draw_bars(commands, root, b, &view, unit, materials, z),
            Element::VLine(l) => elements::draw_vline(commands, root, l, &view, unit, materials, z),
            Element::Box(g) => elements::draw_box(commands, root, g, &view, unit, materials, z),
        }
    }

    let furniture = depth(3.0);
    frame::draw_spines(commands, root, axes, &view, unit, materials, furniture);
    frame::draw_ticks(commands, root, axes, &view, unit, materials, furniture);
    frame::draw_captions(commands, root, axes, &view, furniture);

    if let Some(legend) = &axes.legend {
        legend::draw_legend(commands, root, legend, &view, unit, materials, depth(4.0));
    }

    tracing::trace!(elements = axes.elements.len(), "axes redrawn");
}
