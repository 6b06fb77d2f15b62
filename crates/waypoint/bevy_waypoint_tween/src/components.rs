use bevy::prelude::*;
use waypoint_tween_core::{ConfigError, MoverConfig, PositionTarget, WaypointMover};

/// A waypoint mover attached to an entity. Moves this entity's `Transform`
/// unless a [`WaypointTarget`] points elsewhere.
#[derive(Component, Debug, Clone)]
pub struct WaypointTween(pub WaypointMover);

impl WaypointTween {
    pub fn new(cfg: MoverConfig) -> Result<Self, ConfigError> {
        WaypointMover::new(cfg).map(Self)
    }
}

/// Optional redirect: move another entity's `Transform` instead of our own.
#[derive(Component, Debug, Clone, Copy)]
pub struct WaypointTarget(pub Entity);

/// Adapts a `Transform` to the core's position seam.
pub struct TransformTarget<'a>(pub &'a mut Transform);

impl PositionTarget for TransformTarget<'_> {
    fn position(&self) -> [f32; 3] {
        self.0.translation.to_array()
    }

    fn set_position(&mut self, position: [f32; 3]) {
        self.0.translation = Vec3::from_array(position);
    }
}
