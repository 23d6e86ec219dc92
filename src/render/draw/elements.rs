//! Data elements: histogram bars, reference lines and box glyphs.

#![allow(clippy::too_many_arguments)]

use super::common::*;
use crate::core::{Bars, BoxGlyph, Orientation, VLine};
use crate::render::UnitMeshes;
use bevy::prelude::*;

const EDGE_WIDTH: f32 = 1.0;

pub fn draw_bars(
    commands: &mut Commands,
    root: Entity,
    bars: &Bars,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    let face = material(materials, bars.fill.face_color());
    let edge = bars.fill.edge.map(|c| material(materials, c));

    for (w, &h) in bars.edges.windows(2).zip(&bars.heights) {
        if h <= 0.0 || !h.is_finite() {
            continue;
        }
        let min = view.to_world(w[0], 0.0);
        let max = view.to_world(w[1], h);
        draw_rect(commands, root, unit, &face, min, max, z);
        if let Some(edge) = &edge {
            draw_rect_outline(commands, root, unit, edge, min, max, EDGE_WIDTH, z + 0.001);
        }
    }
}

pub fn draw_vline(
    commands: &mut Commands,
    root: Entity,
    line: &VLine,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    if !line.x.is_finite() {
        return;
    }
    let mat = material(materials, line.line.color);
    let x = view.world_x(line.x);
    draw_line(
        commands,
        root,
        unit,
        &mat,
        Vec2::new(x, view.bottom()),
        Vec2::new(x, view.top()),
        line.line.width,
        line.line.style,
        z,
    );
}

/// Box, whiskers, caps, median/mean lines and fliers of one glyph.
pub fn draw_box(
    commands: &mut Commands,
    root: Entity,
    glyph: &BoxGlyph,
    view: &DataView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    z: f32,
) {
    let s = &glyph.stats;
    let half = glyph.width * 0.5;
    let pos = glyph.position;

    // (value, slot) -> world, whichever way the box lies.
    let at = |value: f64, slot: f64| match glyph.orientation {
        Orientation::Horizontal => view.to_world(value, slot),
        Orientation::Vertical => view.to_world(slot, value),
    };

    let face = material(materials, glyph.fill.face_color());
    let lo = at(s.q1, pos - half);
    let hi = at(s.q3, pos + half);
    let (min, max) = (lo.min(hi), lo.max(hi));
    draw_rect(commands, root, unit, &face, min, max, z);
    if let Some(edge) = glyph.fill.edge {
        let edge = material(materials, edge);
        draw_rect_outline(commands, root, unit, &edge, min, max, EDGE_WIDTH, z + 0.002);
    }

    let wl = &glyph.whisker_line;
    let whisker = material(materials, wl.color);
    let cap = half * 0.5;
    for (from, to) in [(s.q1, s.whisker_low), (s.q3, s.whisker_high)] {
        draw_line(commands, root, unit, &whisker, at(from, pos), at(to, pos), wl.width, wl.style, z);
        draw_segment(
            commands,
            root,
            unit,
            &whisker,
            at(to, pos - cap),
            at(to, pos + cap),
            wl.width,
            z,
        );
    }

    let across = |value: f64| (at(value, pos - half), at(value, pos + half));

    let ml = &glyph.median_line;
    let median = material(materials, ml.color);
    let (a, b) = across(s.median);
    draw_line(commands, root, unit, &median, a, b, ml.width, ml.style, z + 0.003);

    if let Some(ml) = &glyph.mean_line {
        let mean = material(materials, ml.color);
        let (a, b) = across(s.mean);
        draw_line(commands, root, unit, &mean, a, b, ml.width, ml.style, z + 0.003);
    }

    if !s.fliers.is_empty() {
        let face = material(materials, glyph.flier.face);
        let edge = material(materials, glyph.flier.edge);
        for &v in &s.fliers {
            draw_marker(commands, root, unit, &face, &edge, &glyph.flier, at(v, pos), z + 0.004);
        }
    }
}
