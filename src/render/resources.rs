use bevy::prelude::*;

#[derive(Resource, Clone)]
pub struct AxesRes(pub crate::core::Axes);

impl AxesRes {
    pub fn new(axes: crate::core::Axes) -> Self {
        Self(axes)
    }
}

#[derive(Resource)]
pub struct UnitMeshes {
    pub quad: Handle<Mesh>,
    pub circle: Handle<Mesh>,
}

/// Window-space placement of the figure, recomputed on resize.
#[derive(Resource, Default)]
pub struct FigureRect {
    pub world_center: Vec2,
    pub world_size: Vec2,
    pub dirty: bool,
}

pub fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn setup_unit_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let quad = meshes.add(Mesh::from(Rectangle::new(1.0, 1.0)));
    let circle = meshes.add(Mesh::from(Circle::new(0.5)));
    commands.insert_resource(UnitMeshes { quad, circle });
}
