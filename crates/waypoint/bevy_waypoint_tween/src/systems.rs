use bevy::prelude::*;

use crate::components::{TransformTarget, WaypointTarget, WaypointTween};
use crate::events::{PlayWaypointTween, StopWaypointTween, WaypointClicked, WaypointTweenEvent};

/// Activation hook: newly added movers get their one `on_start` call.
pub fn activate_movers_system(mut added: Query<&mut WaypointTween, Added<WaypointTween>>) {
    for mut tween in added.iter_mut() {
        tween.0.on_start();
    }
}

/// Route click/play/stop requests to their movers. Stops are applied last,
/// so a stop sent in the same frame as a play wins.
pub fn trigger_movers_system(
    mut clicks: EventReader<WaypointClicked>,
    mut plays: EventReader<PlayWaypointTween>,
    mut stops: EventReader<StopWaypointTween>,
    mut movers: Query<&mut WaypointTween>,
) {
    for ev in clicks.read() {
        if let Ok(mut tween) = movers.get_mut(ev.entity) {
            tween.0.on_pointer_clicked();
        }
    }
    for ev in plays.read() {
        match movers.get_mut(ev.entity) {
            Ok(mut tween) => {
                tween.0.play();
            }
            Err(_) => warn!("play requested for {:?}, which has no WaypointTween", ev.entity),
        }
    }
    for ev in stops.read() {
        if let Ok(mut tween) = movers.get_mut(ev.entity) {
            tween.0.stop();
        }
    }
}

/// Per-frame tick: advance every moving mover by the frame delta and write
/// the result into the target `Transform`.
pub fn advance_movers_system(
    time: Res<Time>,
    mut movers: Query<(Entity, &mut WaypointTween, Option<&WaypointTarget>)>,
    mut transforms: Query<&mut Transform>,
    mut events: EventWriter<WaypointTweenEvent>,
) {
    let dt = time.delta_seconds();
    for (entity, mut tween, redirect) in movers.iter_mut() {
        if !tween.0.is_moving() {
            continue;
        }
        let target = redirect.map_or(entity, |r| r.0);
        let Ok(mut transform) = transforms.get_mut(target) else {
            warn!(
                "waypoint mover {:?}: target {:?} has no Transform; stopping",
                entity, target
            );
            tween.0.stop();
            continue;
        };
        let Some(tick) = tween.0.advance(dt, &mut TransformTarget(&mut transform)) else {
            continue;
        };
        if let Some(event) = tick.event {
            debug!("waypoint mover {:?}: {:?}", entity, event);
            events.send(WaypointTweenEvent { entity, event });
        }
    }
}
