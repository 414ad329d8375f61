//! Машина под Rapier: газ разгоняет, руль поворачивает
//!
//! Полный стек как в headless main: TransformPlugin + Rapier в fixed schedule,
//! земля — fixed cuboid, колёса — ball collider'ы шасси.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;
use axledrive_simulation::*;

fn spawn_ground_scene(mut commands: Commands, config: Res<VehicleConfig>) {
    commands.spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(200.0, 0.5, 200.0),
        SceneMember,
    ));

    let time = commands.spawn((Readout::default(), SceneMember)).id();
    let speed = commands.spawn((Readout::default(), SceneMember)).id();

    spawn_vehicle(
        &mut commands,
        &config,
        Transform::from_xyz(0.0, 1.0, 0.0),
        VehicleDisplays {
            time: Some(time),
            speed: Some(speed),
        },
    );
}

/// Helper: App с Rapier и построенной сценой "Main"
fn create_physics_app() -> (App, Entity) {
    let mut app = create_headless_app();
    insert_vehicle_config(&mut app, VehicleConfig::default());
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
    ))
    .register_scene(MAIN_SCENE, spawn_ground_scene);

    app.world_mut().send_event(ReloadScene::main());
    app.update();

    let world = app.world_mut();
    let vehicle = world
        .query_filtered::<Entity, With<Vehicle>>()
        .single(world)
        .unwrap();

    (app, vehicle)
}

fn drive(app: &mut App, vertical: f32, horizontal: f32, frames: usize) {
    for _ in 0..frames {
        app.world_mut().resource_mut::<DriveAxes>().set(vertical, horizontal);
        app.update();
    }
}

#[test]
fn test_full_throttle_moves_vehicle_forward() {
    let (mut app, entity) = create_physics_app();

    drive(&mut app, 1.0, 0.0, 150);

    let transform = *app.world().get::<Transform>(entity).unwrap();
    let velocity = *app.world().get::<Velocity>(entity).unwrap();
    let forward_speed = local_forward_speed(transform.rotation, velocity.linvel);
    assert!(forward_speed > 0.5, "forward speed = {forward_speed}");
    assert!(transform.translation.z < 0.0, "translation = {:?}", transform.translation);

    let speed_display = app.world().get::<Vehicle>(entity).unwrap().speed_display.unwrap();
    let speed = &app.world().get::<Readout>(speed_display).unwrap().0;
    assert_ne!(speed, "0.00 km/h");
    assert!(!speed.starts_with('-'), "speed = {speed}");
}

#[test]
fn test_positive_steer_turns_right() {
    let (mut app, entity) = create_physics_app();

    drive(&mut app, 1.0, 1.0, 300);

    let transform = app.world().get::<Transform>(entity).unwrap();
    // Вперёд = −Z, вправо = +X
    assert!(transform.translation.x > 0.0, "translation = {:?}", transform.translation);
}
