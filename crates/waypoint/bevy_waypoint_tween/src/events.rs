use bevy::prelude::*;
use waypoint_tween_core::MoverEvent;

/// Pointer-down on a mover's hit region. Sent by the host's picking layer.
#[derive(Event, Debug, Clone, Copy)]
pub struct WaypointClicked {
    pub entity: Entity,
}

/// Explicit play request (UI buttons, scripts, other systems).
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayWaypointTween {
    pub entity: Entity,
}

/// Force a mover idle mid-segment.
#[derive(Event, Debug, Clone, Copy)]
pub struct StopWaypointTween {
    pub entity: Entity,
}

/// Segment completion reported by a mover.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointTweenEvent {
    pub entity: Entity,
    pub event: MoverEvent,
}
