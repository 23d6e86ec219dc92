use super::*;
use bevy::window::PrimaryWindow;

/// Margin between the window edge and the figure, in logical pixels.
const WINDOW_MARGIN: f32 = 20.0;

/// Track the window size; mark the figure dirty when it changes.
pub fn update_figure_rect(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut rect: ResMut<FigureRect>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let size = Vec2::new(
        (window.width() - 2.0 * WINDOW_MARGIN).max(1.0),
        (window.height() - 2.0 * WINDOW_MARGIN).max(1.0),
    );

    if rect.world_size != size {
        rect.world_center = Vec2::ZERO;
        rect.world_size = size;
        rect.dirty = true;
    }
}

/// Rebuild the scene from scratch when the layout or the surface changed.
pub fn redraw_axes(
    mut commands: Commands,
    mut rect: ResMut<FigureRect>,
    roots: Query<Entity, With<AxesRoot>>,
    axes: Res<AxesRes>,
    unit: Res<UnitMeshes>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !rect.dirty && !axes.is_changed() {
        return;
    }
    rect.dirty = false;

    for root in roots.iter() {
        commands.entity(root).try_despawn();
    }

    let root = commands
        .spawn((AxesRoot, Transform::default(), Visibility::default()))
        .id();

    draw_axes(&mut commands, root, &axes.0, &rect, &unit, &mut materials);
}
