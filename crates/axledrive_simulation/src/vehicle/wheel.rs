//! Минимальная физика колёс поверх Rapier
//!
//! Колёса — ball collider'ы без трения на шасси (контакт/подвеска — Rapier).
//! Здесь только тяга и боковое сцепление:
//! - drive: `motor_torque / radius` вдоль forward колеса
//! - grip: `−v_lateral × lateral_grip` поперёк
//!
//! Силы всех колёс суммируются в `ExternalForce` шасси (force + torque
//! относительно центра масс).

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{Vehicle, VehicleBody, WheelCollider};

/// Запас по высоте для проверки контакта (m)
pub const CONTACT_TOLERANCE: f32 = 0.05;

/// Высота земли для ground check колёс
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GroundLevel(pub f32);

/// Сила в точке контакта одного колеса
pub fn wheel_contact_force(
    wheel: &WheelCollider,
    forward: Vec3,
    right: Vec3,
    point_velocity: Vec3,
) -> Vec3 {
    let drive = forward * (wheel.motor_torque / wheel.radius);
    let grip = -right * point_velocity.dot(right) * wheel.lateral_grip;
    drive + grip
}

/// Обороты в минуту для скорости качения (m/s)
pub fn rolling_rpm(rolling_speed: f32, radius: f32) -> f32 {
    rolling_speed / radius * 60.0 / TAU
}

/// Ground check через простую проверку высоты нижней точки колеса
///
/// TODO: заменить на ray cast через RapierContext, чтобы работать с рельефом
pub fn is_grounded(contact_point: Vec3, ground: f32) -> bool {
    contact_point.y <= ground + CONTACT_TOLERANCE
}

pub fn simulate_wheels(
    mut vehicles: Query<(&Vehicle, &VehicleBody, &Transform, &Velocity, &mut ExternalForce)>,
    mut wheels: Query<&mut WheelCollider>,
    ground: Res<GroundLevel>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (vehicle, body, chassis, velocity, mut external) in vehicles.iter_mut() {
        let center_of_mass = chassis.transform_point(body.center_of_mass);
        let up = chassis.rotation * Vec3::Y;

        let mut force = Vec3::ZERO;
        let mut torque = Vec3::ZERO;

        for axle in &vehicle.axles {
            for wheel_entity in [axle.left_wheel, axle.right_wheel] {
                let Ok(mut wheel) = wheels.get_mut(wheel_entity) else {
                    continue;
                };

                let (center, _) = wheel.world_pose(chassis);
                let contact = center - up * wheel.radius;
                let lever = contact - center_of_mass;
                let point_velocity = velocity.linvel + velocity.angvel.cross(lever);

                let forward = wheel.world_forward(chassis);
                let right = forward.cross(up);
                let rolling_speed = point_velocity.dot(forward);

                wheel.grounded = is_grounded(contact, ground.0);
                wheel.rpm = rolling_rpm(rolling_speed, wheel.radius);
                wheel.spin = (wheel.spin + rolling_speed / wheel.radius * delta).rem_euclid(TAU);

                if wheel.grounded {
                    let contact_force = wheel_contact_force(&wheel, forward, right, point_velocity);
                    force += contact_force;
                    torque += lever.cross(contact_force);
                }
            }
        }

        *external = ExternalForce { force, torque };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_force_from_torque() {
        let wheel = WheelCollider {
            radius: 0.5,
            motor_torque: 100.0,
            ..default()
        };

        let force = wheel_contact_force(&wheel, Vec3::NEG_Z, Vec3::X, Vec3::ZERO);

        // 100 N·m / 0.5 m = 200 N вперёд
        assert!((force - Vec3::new(0.0, 0.0, -200.0)).length() < 1e-4, "force = {force:?}");
    }

    #[test]
    fn test_grip_opposes_sideslip() {
        let wheel = WheelCollider {
            lateral_grip: 1000.0,
            ..default()
        };

        let force = wheel_contact_force(&wheel, Vec3::NEG_Z, Vec3::X, Vec3::new(0.5, 0.0, -10.0));

        // Продольная скорость не тормозится, боковая гасится
        assert!((force.x + 500.0).abs() < 1e-3, "force = {force:?}");
        assert!(force.z.abs() < 1e-3);
    }

    #[test]
    fn test_rpm() {
        // 2π·r за оборот: при r = 1 и v = 2π m/s → 1 об/с = 60 rpm
        let rpm = rolling_rpm(TAU, 1.0);
        assert!((rpm - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_ground_check() {
        assert!(is_grounded(Vec3::new(0.0, 0.02, 0.0), 0.0));
        assert!(!is_grounded(Vec3::new(0.0, 0.5, 0.0), 0.0));
    }
}
