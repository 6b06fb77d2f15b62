use std::time::Duration;

use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy_waypoint_tween::{
    PlayWaypointTween, StopWaypointTween, WaypointClicked, WaypointTarget, WaypointTween,
    WaypointTweenEvent, WaypointTweenPlugin,
};
use waypoint_tween_core::{MoverConfig, MoverEvent};

/// Bare app with a hand-driven clock so each update has a known delta.
fn app() -> App {
    let mut app = App::new();
    app.add_plugins(WaypointTweenPlugin)
        .insert_resource(Time::<()>::default());
    app
}

fn step(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .expect("entity has a Transform")
        .translation
}

fn tween(cfg: MoverConfig) -> WaypointTween {
    WaypointTween::new(cfg).expect("valid mover config")
}

fn one_waypoint() -> MoverConfig {
    MoverConfig::default().with_waypoints(vec![[2.0, 0.0, 0.0]])
}

#[test]
fn plugin_registers_events() {
    let app = app();
    assert!(app.world().contains_resource::<Events<WaypointClicked>>());
    assert!(app.world().contains_resource::<Events<PlayWaypointTween>>());
    assert!(app.world().contains_resource::<Events<StopWaypointTween>>());
    assert!(app.world().contains_resource::<Events<WaypointTweenEvent>>());
}

#[test]
fn autoplay_moves_transform_and_reports_finish() {
    let mut app = app();
    let e = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 0.0, 7.0),
            tween(one_waypoint().with_autoplay(true)),
        ))
        .id();

    step(&mut app, 0.5);
    assert_eq!(translation(&app, e), Vec3::new(1.0, 0.0, 7.0));

    step(&mut app, 0.5);
    assert_eq!(translation(&app, e), Vec3::new(2.0, 0.0, 7.0));

    let events = app.world().resource::<Events<WaypointTweenEvent>>();
    let mut reader = events.get_reader();
    let seen: Vec<_> = reader.read(events).copied().collect();
    assert_eq!(
        seen,
        vec![WaypointTweenEvent {
            entity: e,
            event: MoverEvent::Finished { index: 0 },
        }]
    );
    assert!(!app.world().get::<WaypointTween>(e).unwrap().0.is_moving());
}

#[test]
fn click_starts_only_click_triggered_movers() {
    let mut app = app();
    let clickable = app
        .world_mut()
        .spawn((
            Transform::default(),
            tween(one_waypoint().with_click_trigger(true)),
        ))
        .id();
    let inert = app
        .world_mut()
        .spawn((Transform::default(), tween(one_waypoint())))
        .id();

    step(&mut app, 0.5);
    assert_eq!(translation(&app, clickable), Vec3::ZERO);

    app.world_mut().send_event(WaypointClicked { entity: clickable });
    app.world_mut().send_event(WaypointClicked { entity: inert });
    step(&mut app, 0.5);

    assert_eq!(translation(&app, clickable), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(translation(&app, inert), Vec3::ZERO);
}

#[test]
fn redirected_mover_writes_other_entity() {
    let mut app = app();
    let moved = app.world_mut().spawn(Transform::default()).id();
    let controller = app
        .world_mut()
        .spawn((tween(one_waypoint()), WaypointTarget(moved)))
        .id();

    app.world_mut().send_event(PlayWaypointTween { entity: controller });
    step(&mut app, 0.25);

    assert_eq!(translation(&app, moved), Vec3::new(0.5, 0.0, 0.0));
    assert!(app.world().get::<Transform>(controller).is_none());
}

#[test]
fn stop_event_freezes_transform() {
    let mut app = app();
    let e = app
        .world_mut()
        .spawn((Transform::default(), tween(one_waypoint())))
        .id();

    app.world_mut().send_event(PlayWaypointTween { entity: e });
    step(&mut app, 0.5);
    app.world_mut().send_event(StopWaypointTween { entity: e });
    step(&mut app, 0.25);

    assert_eq!(translation(&app, e), Vec3::new(1.0, 0.0, 0.0));
    assert!(!app.world().get::<WaypointTween>(e).unwrap().0.is_moving());
}

#[test]
fn mover_without_transform_is_stopped() {
    let mut app = app();
    let e = app.world_mut().spawn(tween(one_waypoint())).id();

    app.world_mut().send_event(PlayWaypointTween { entity: e });
    step(&mut app, 0.5);

    let mover = &app.world().get::<WaypointTween>(e).unwrap().0;
    assert!(!mover.is_moving());
    assert!(mover.has_started());
}
