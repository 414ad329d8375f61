use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use axledrive_simulation::logger::{log_error, log_info};
use axledrive_simulation::{
    insert_vehicle_config, spawn_vehicle, FollowCamera, ReloadScene, SceneAppExt, SceneMember,
    SimulationPlugin, VehicleConfig, DEFAULT_CONFIG_PATH, MAIN_SCENE,
};

mod controls;
mod hud;
mod rendering;

use controls::ControlsPlugin;
use hud::HudPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    axledrive_simulation::logger::init_logger();

    let config = match VehicleConfig::load_or_default(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("{err}"));
            std::process::exit(1);
        }
    };
    log_info(&format!(
        "Vehicle config: {} axles, max torque {} N·m, max steer {}°",
        config.axles.len(),
        config.max_motor_torque,
        config.max_steering_angle
    ));

    let mut app = App::new();
    app
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "AXLEDRIVE".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics step в FixedUpdate, вместе с контроллером
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        // Simulation (vehicle controller, HUD строки, камера, reset)
        .add_plugins(SimulationPlugin)
        // Rendering sync (simulation → meshes)
        .add_plugins(RenderingSyncPlugin)
        // UI labels + Reset button
        .add_plugins(HudPlugin)
        // Keyboard / gamepad → DriveAxes
        .add_plugins(ControlsPlugin)
        .register_scene(MAIN_SCENE, setup_main_scene)
        .add_systems(Startup, load_main_scene);

    insert_vehicle_config(&mut app, config);
    app.run();
}

fn load_main_scene(mut writer: EventWriter<ReloadScene>) {
    writer.write(ReloadScene::main());
}

/// Сцена "Main": земля, свет, камера, HUD и машина
fn setup_main_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<VehicleConfig>,
) {
    // Ground (400x400m)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(200.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, config.ground_level, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(200.0, 0.01, 200.0),
        SceneMember,
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
        SceneMember,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    let displays = hud::spawn_hud(&mut commands);

    let vehicle = spawn_vehicle(
        &mut commands,
        &config,
        Transform::from_xyz(0.0, config.ground_level + 1.0, 0.0),
        displays,
    );

    // Позицию выставит initialize_vehicles
    commands.spawn((
        Camera3d::default(),
        Transform::default(),
        FollowCamera {
            target: vehicle,
            smoothing: config.camera_smoothing,
        },
        SceneMember,
    ));
}
