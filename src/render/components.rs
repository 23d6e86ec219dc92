use bevy::prelude::*;

/// Parent of every entity drawn for the current surface.
#[derive(Component)]
pub struct AxesRoot;
