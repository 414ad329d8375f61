//! Trailing camera
//!
//! Камера стоит в `Vehicle::camera_offset` (локальные координаты машины)
//! и экспоненциально догоняет эту точку: каждый physics step проходит
//! `smoothing` долю оставшегося пути, потом смотрит на origin машины.

use bevy::prelude::*;

use crate::components::{FollowCamera, Vehicle};

/// Точка, куда стремится камера
pub fn camera_target(vehicle: &Vehicle, vehicle_transform: &Transform) -> Vec3 {
    vehicle_transform.transform_point(vehicle.camera_offset)
}

/// Один шаг: `(1 − s) × current + s × target`
pub fn follow_step(current: Vec3, target: Vec3, smoothing: f32) -> Vec3 {
    current.lerp(target, smoothing)
}

/// Сразу ставит камеру в точку offset (без сглаживания)
pub fn snap_camera(camera: &mut Transform, vehicle: &Vehicle, vehicle_transform: &Transform) {
    camera.translation = camera_target(vehicle, vehicle_transform);
    camera.look_at(vehicle_transform.translation, Vec3::Y);
}

pub fn follow_vehicle(
    vehicles: Query<(&Vehicle, &Transform), Without<FollowCamera>>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    for (follow, mut camera) in cameras.iter_mut() {
        let Ok((vehicle, vehicle_transform)) = vehicles.get(follow.target) else {
            continue;
        };

        let target = camera_target(vehicle, vehicle_transform);
        camera.translation = follow_step(camera.translation, target, follow.smoothing);
        camera.look_at(vehicle_transform.translation, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_step_is_lerp() {
        let old = Vec3::new(0.0, 10.0, 0.0);
        let target = Vec3::new(10.0, 0.0, 5.0);

        let new = follow_step(old, target, 0.2);

        let expected = old * 0.8 + target * 0.2;
        assert!((new - expected).length() < 1e-5, "new = {new:?}");
    }

    #[test]
    fn test_follow_converges() {
        let target = Vec3::new(3.0, 1.0, -2.0);
        let mut position = Vec3::ZERO;

        for _ in 0..100 {
            position = follow_step(position, target, 0.2);
        }

        assert!((position - target).length() < 1e-3);
    }

    #[test]
    fn test_target_rotates_with_vehicle() {
        let vehicle = Vehicle {
            axles: Vec::new(),
            max_motor_torque: 0.0,
            max_steering_angle: 0.0,
            camera_offset: Vec3::new(0.0, 1.0, 3.5),
            time_display: None,
            speed_display: None,
        };
        // Машина развёрнута на 180°: "сзади" теперь −Z
        let transform = Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::PI));

        let target = camera_target(&vehicle, &transform);

        assert!((target - Vec3::new(0.0, 1.0, -3.5)).length() < 1e-4, "target = {target:?}");
    }
}
