use bevy::prelude::*;

use crate::core::Axes;
use crate::render::{AxesRenderPlugin, AxesRes};

/// Open a native window showing `axes`. Blocks until the window is closed.
pub fn show(axes: Axes) {
    let title = axes
        .meta
        .title
        .clone()
        .unwrap_or_else(|| "vidi-stats".to_string());
    tracing::debug!(%title, elements = axes.elements.len(), "opening plot window");

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(AxesRes::new(axes))
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title,
                    ..default()
                }),
                ..default()
            }),
            AxesRenderPlugin,
        ))
        .run();
}
