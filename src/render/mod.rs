pub mod components;
pub mod draw;
pub mod resources;
pub mod systems;

pub use components::*;
pub use draw::*;
pub use resources::*;
use systems::*;

use bevy::prelude::*;

/// Draws the [`AxesRes`] surface into the primary window and redraws it
/// whenever the window is resized or the surface changes.
#[derive(Default)]
pub struct AxesRenderPlugin;

impl Plugin for AxesRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FigureRect>()
            .add_systems(Startup, (setup_scene, setup_unit_meshes))
            .add_systems(Update, (update_figure_rect, redraw_axes).chain());
    }
}
