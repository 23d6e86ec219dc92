#![allow(clippy::too_many_arguments)]

use super::common::*;
use crate::core::{Legend, LegendHandle, LegendLoc};
use crate::render::UnitMeshes;
use bevy::prelude::*;

/// Legend box: one row per entry, handle on the left and label on the right.
pub fn draw_legend(
    commands: &mut Commands,
    root: Entity,
    legend: &Legend,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    if legend.entries.is_empty() {
        return;
    }

    let font = legend.font_size;
    let pad = font * 0.5;
    let row = font * 1.5;
    let handle_len = font * 2.0;
    let widest = legend
        .entries
        .iter()
        .map(|e| text_width(&e.label, font))
        .fold(0.0, f32::max);
    let size = Vec2::new(
        pad * 3.0 + handle_len + widest,
        pad * 2.0 + row * legend.entries.len() as f32,
    );

    let anchor = view.fraction(legend.anchor[0], legend.anchor[1]);
    let min = match legend.loc {
        LegendLoc::UpperLeft => Vec2::new(anchor.x, anchor.y - size.y),
        LegendLoc::UpperRight => anchor - size,
        LegendLoc::LowerLeft => anchor,
        LegendLoc::LowerRight => Vec2::new(anchor.x - size.x, anchor.y),
    };
    let max = min + size;

    let bg = material(materials, crate::core::Color::WHITE.with_a(0.8));
    let frame = materials.add(ColorMaterial::from(Color::srgb(0.8, 0.8, 0.8)));
    draw_rect(commands, root, unit, &bg, min, max, z);
    draw_rect_outline(commands, root, unit, &frame, min, max, 1.0, z + 0.001);

    for (i, entry) in legend.entries.iter().enumerate() {
        let cy = max.y - pad - row * (i as f32 + 0.5);
        let hx = min.x + pad;
        let hz = z + 0.002;

        match &entry.handle {
            LegendHandle::Line(line) => {
                let mat = material(materials, line.color);
                draw_line(
                    commands,
                    root,
                    unit,
                    &mat,
                    Vec2::new(hx, cy),
                    Vec2::new(hx + handle_len, cy),
                    line.width,
                    line.style,
                    hz,
                );
            }
            LegendHandle::Marker(marker) => {
                let face = material(materials, marker.face);
                let edge = material(materials, marker.edge);
                let centre = Vec2::new(hx + handle_len * 0.5, cy);
                draw_marker(commands, root, unit, &face, &edge, marker, centre, hz);
            }
            LegendHandle::Patch(fill) => {
                let face = material(materials, fill.face_color());
                let pmin = Vec2::new(hx, cy - font * 0.35);
                let pmax = Vec2::new(hx + handle_len, cy + font * 0.35);
                draw_rect(commands, root, unit, &face, pmin, pmax, hz);
                if let Some(edge) = fill.edge {
                    let edge = material(materials, edge);
                    draw_rect_outline(commands, root, unit, &edge, pmin, pmax, 1.0, hz + 0.001);
                }
            }
        }

        let width = text_width(&entry.label, font);
        draw_text(
            commands,
            root,
            entry.label.clone(),
            font,
            Color::BLACK,
            Vec2::new(hx + handle_len + pad + width * 0.5, cy),
            0.0,
            hz,
        );
    }
}
