//! AXLEDRIVE Simulation Core
//!
//! Four-wheel vehicle controller на Bevy 0.16 + Rapier.
//!
//! Симуляция не знает про рендер и UI:
//! - ввод приходит через `DriveAxes` (клиент/скрипт пишет raw значения)
//! - HUD строки пишутся в `Readout` компоненты
//! - камера — любой entity с `FollowCamera` + Transform

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

pub mod camera;
pub mod components;
pub mod config;
pub mod hud;
pub mod input;
pub mod logger;
pub mod scene;
pub mod vehicle;

pub use camera::{camera_target, follow_step, follow_vehicle};
pub use components::*;
pub use config::{AxleConfig, ConfigError, VehicleConfig, WheelConfig, DEFAULT_CONFIG_PATH};
pub use hud::{format_elapsed, format_speed, local_forward_speed};
pub use input::{AxisSmoothing, DriveAxes, DriveInputPlugin};
pub use scene::{
    request_main_reload, ReloadScene, SceneAppExt, SceneMember, ScenePlugin, SceneRegistry,
    MAIN_SCENE,
};
pub use vehicle::{
    spawn_vehicle, GroundLevel, NeedsVisual, VehicleControlSet, VehicleDisplays, VehiclePlugin,
    WheelVisual, WHEEL_FRICTION,
};

/// Частота physics step (как fixed timestep 0.02 s)
pub const FIXED_HZ: f64 = 50.0;

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Rapier подключается отдельно (клиент / headless main), чтобы тесты
/// могли гонять контроллер без физики.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_plugins((DriveInputPlugin, VehiclePlugin, ScenePlugin));
    }
}

/// Кладёт конфиг в World (resource + ground level для колёс)
pub fn insert_vehicle_config(app: &mut App, config: VehicleConfig) {
    app.insert_resource(GroundLevel(config.ground_level))
        .insert_resource(config);
}

/// Minimal Bevy App для headless прогонов
///
/// Каждый `app.update()` двигает время ровно на один physics step.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / FIXED_HZ,
        )));

    app
}
