//! Vehicle controller
//!
//! Порядок в FixedUpdate. Rapier (`in_fixed_schedule`) шагает в
//! FixedPostUpdate, так что вся цепочка отрабатывает до physics step
//! за счёт порядка schedule'ов.
//!
//! 1. initialize_vehicles — mass properties + камера для новых машин
//! 2. apply_drive_input — ввод → torque/steer на колёса
//! 3. simulate_wheels — колёса → ExternalForce шасси
//! 4. sync_wheel_visuals — визуальные колёса → поза физических
//! 5. update_readouts — HUD строки
//! 6. follow_vehicle — камера догоняет машину

pub mod drive;
pub mod spawn;
pub mod wheel;

pub use drive::{apply_drive_input, initialize_vehicles, sync_wheel_visuals};
pub use spawn::{spawn_vehicle, NeedsVisual, VehicleDisplays, WheelVisual, WHEEL_FRICTION};
pub use wheel::{simulate_wheels, wheel_contact_force, GroundLevel};

use bevy::prelude::*;

use crate::camera::follow_vehicle;
use crate::hud::update_readouts;

/// Набор систем контроллера (для ordering снаружи)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleControlSet;

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GroundLevel>()
            .register_type::<crate::components::WheelCollider>();

        app.add_systems(
            FixedUpdate,
            (
                initialize_vehicles,
                apply_drive_input,
                simulate_wheels,
                sync_wheel_visuals,
                update_readouts,
                follow_vehicle,
            )
                .chain()
                .in_set(VehicleControlSet),
        );
    }
}
