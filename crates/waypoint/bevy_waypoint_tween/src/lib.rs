//! Bevy plugin that hosts waypoint tween movers.
//!
//! The core is engine-agnostic; this crate supplies what it expects from a
//! host: a per-frame delta (`Res<Time>`), activation/click/play/stop signals
//! as Bevy events, and a `Transform` to write positions into.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::{TransformTarget, WaypointTarget, WaypointTween};
pub use events::{PlayWaypointTween, StopWaypointTween, WaypointClicked, WaypointTweenEvent};
pub use waypoint_tween_core;

/// Ordering of the plugin's work inside `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaypointTweenSet;

pub struct WaypointTweenPlugin;

impl Plugin for WaypointTweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WaypointClicked>()
            .add_event::<PlayWaypointTween>()
            .add_event::<StopWaypointTween>()
            .add_event::<WaypointTweenEvent>()
            .add_systems(
                Update,
                (
                    systems::activate_movers_system,
                    systems::trigger_movers_system,
                    systems::advance_movers_system,
                )
                    .chain()
                    .in_set(WaypointTweenSet),
            );
    }
}
