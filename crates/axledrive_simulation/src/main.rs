//! Headless прогон AXLEDRIVE
//!
//! Машина едет по скрипту (газ + плавный поворот), HUD строки печатаются
//! в лог, на середине прогона — Reset сцены "Main".

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;

use axledrive_simulation::logger::{log_error, log_info};
use axledrive_simulation::{
    create_headless_app, insert_vehicle_config, spawn_vehicle, DriveAxes, FollowCamera, Readout,
    ReloadScene, SceneAppExt, SceneMember, Vehicle, VehicleConfig, VehicleDisplays,
    DEFAULT_CONFIG_PATH, MAIN_SCENE,
};

const TICKS: usize = 1000;
const RESET_TICK: usize = 500;

fn main() {
    let config = match VehicleConfig::load_or_default(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            // До create_headless_app logger ещё не поднят
            axledrive_simulation::logger::init_logger();
            log_error(&format!("{err}"));
            std::process::exit(1);
        }
    };

    let mut app = create_headless_app();
    insert_vehicle_config(&mut app, config);
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
    ))
    .register_scene(MAIN_SCENE, spawn_headless_scene);

    log_info(&format!("Starting AXLEDRIVE headless run ({} ticks)", TICKS));
    app.world_mut().send_event(ReloadScene::main());

    for tick in 0..TICKS {
        let steer = ((tick as f32) * 0.01).sin();
        app.world_mut().resource_mut::<DriveAxes>().set_raw(1.0, steer);

        if tick == RESET_TICK {
            app.world_mut().send_event(ReloadScene::main());
        }

        app.update();

        if tick % 100 == 0 {
            print_readouts(&mut app, tick);
        }
    }

    log_info("Headless run complete");
}

fn spawn_headless_scene(mut commands: Commands, config: Res<VehicleConfig>) {
    commands.spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(200.0, 0.5, 200.0),
        SceneMember,
    ));

    let time = commands.spawn((Readout::default(), SceneMember)).id();
    let speed = commands.spawn((Readout::default(), SceneMember)).id();

    let vehicle = spawn_vehicle(
        &mut commands,
        &config,
        Transform::from_xyz(0.0, 1.0, 0.0),
        VehicleDisplays {
            time: Some(time),
            speed: Some(speed),
        },
    );

    commands.spawn((
        Transform::default(),
        FollowCamera {
            target: vehicle,
            smoothing: config.camera_smoothing,
        },
        SceneMember,
    ));
}

fn print_readouts(app: &mut App, tick: usize) {
    let world = app.world_mut();
    let mut vehicles = world.query::<&Vehicle>();
    let displays: Vec<_> = vehicles
        .iter(world)
        .map(|vehicle| (vehicle.time_display, vehicle.speed_display))
        .collect();

    for (time, speed) in displays {
        let text = |entity: Option<Entity>| {
            entity
                .and_then(|e| world.get::<Readout>(e))
                .map(|readout| readout.0.clone())
                .unwrap_or_default()
        };
        log_info(&format!("Tick {}: {} | {}", tick, text(time), text(speed)));
    }
}
