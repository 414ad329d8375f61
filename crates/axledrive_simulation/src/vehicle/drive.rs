//! Vehicle controller: активация, ввод → колёса, синхронизация визуала

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::camera::snap_camera;
use crate::components::{FollowCamera, Vehicle, VehicleBody, WheelCollider};
use crate::input::DriveAxes;
use crate::logger::{log_info, log_warning};

/// Активация машины
///
/// - Mass properties rigid body с опущенным центром масс
/// - Все `FollowCamera`, смотрящие на машину, сразу ставятся за ней
/// - Колёса осей без `WheelCollider` — один warning здесь, дальше молча
pub fn initialize_vehicles(
    mut commands: Commands,
    added: Query<(Entity, &Vehicle, &VehicleBody, &Transform), Added<Vehicle>>,
    mut cameras: Query<(&FollowCamera, &mut Transform), Without<Vehicle>>,
    wheels: Query<(), With<WheelCollider>>,
) {
    for (entity, vehicle, body, transform) in added.iter() {
        for axle in &vehicle.axles {
            for wheel_entity in [axle.left_wheel, axle.right_wheel] {
                if !wheels.contains(wheel_entity) {
                    log_warning(&format!(
                        "Vehicle {:?}: wheel {:?} has no WheelCollider, torque/steering skipped",
                        entity, wheel_entity
                    ));
                }
            }
        }

        commands
            .entity(entity)
            .insert(ColliderMassProperties::MassProperties(MassProperties {
                local_center_of_mass: body.center_of_mass,
                mass: body.mass,
                principal_inertia_local_frame: Quat::IDENTITY,
                principal_inertia: body.principal_inertia(),
            }));

        for (follow, mut camera) in cameras.iter_mut() {
            if follow.target == entity {
                snap_camera(&mut camera, vehicle, transform);
            }
        }

        log_info(&format!(
            "Vehicle {:?} activated: {} axles, center of mass {:?}",
            entity,
            vehicle.axles.len(),
            body.center_of_mass
        ));
    }
}

/// Ввод → motor torque / steer angle на колёса осей
///
/// `steering` ось получает угол, `motorized` — torque. Остальные
/// параметры колеса не трогаем. Колёса без `WheelCollider` пропускаются
/// (warning уже был в `initialize_vehicles`).
pub fn apply_drive_input(
    axes: Res<DriveAxes>,
    vehicles: Query<&Vehicle>,
    mut wheels: Query<&mut WheelCollider>,
) {
    for vehicle in vehicles.iter() {
        let motor_torque = vehicle.motor_torque(axes.vertical);
        let steer_angle = vehicle.steer_angle(axes.horizontal);

        for axle in &vehicle.axles {
            for wheel_entity in [axle.left_wheel, axle.right_wheel] {
                let Ok(mut wheel) = wheels.get_mut(wheel_entity) else {
                    continue;
                };

                if axle.steering {
                    wheel.steer_angle = steer_angle;
                }
                if axle.motorized {
                    wheel.motor_torque = motor_torque;
                }
            }
        }
    }
}

/// Визуальные колёса → мировая поза физического колеса
///
/// Отсутствующий визуал (None или уже despawn'нутый entity) пропускается молча.
pub fn sync_wheel_visuals(
    vehicles: Query<(&Vehicle, &Transform)>,
    wheels: Query<&WheelCollider>,
    mut visuals: Query<&mut Transform, Without<Vehicle>>,
) {
    for (vehicle, chassis) in vehicles.iter() {
        for axle in &vehicle.axles {
            for (wheel_entity, visual_entity) in axle.sides() {
                let Some(visual_entity) = visual_entity else {
                    continue;
                };
                let Ok(wheel) = wheels.get(wheel_entity) else {
                    continue;
                };
                let Ok(mut visual) = visuals.get_mut(visual_entity) else {
                    continue;
                };

                let (position, rotation) = wheel.world_pose(chassis);
                visual.translation = position;
                visual.rotation = rotation;
            }
        }
    }
}
