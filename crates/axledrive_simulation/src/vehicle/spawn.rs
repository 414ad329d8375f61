//! Spawn helper: шасси + колёса + визуальные колёса

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{Axle, Vehicle, VehicleBody, WheelCollider};
use crate::config::VehicleConfig;
use crate::scene::SceneMember;

/// Marker: визуальное колесо (клиент вешает на него mesh)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct WheelVisual {
    pub radius: f32,
}

/// Marker: шасси ждёт визуал (клиент вешает mesh)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct NeedsVisual;

/// Контакт колеса с землёй несёт только нормальную силу
///
/// `Min` с нулём: трение земли до колеса не доходит, тягу и сцепление
/// даёт только `simulate_wheels`.
pub const WHEEL_FRICTION: Friction = Friction {
    coefficient: 0.0,
    combine_rule: CoefficientCombineRule::Min,
};

/// HUD entity, куда машина пишет строки
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleDisplays {
    pub time: Option<Entity>,
    pub speed: Option<Entity>,
}

/// Создаёт машину по конфигу
///
/// - Шасси: RigidBody::Dynamic + cuboid collider + Velocity/ExternalForce
/// - Колёса: ball collider'ы (children шасси), без массы и трения (`WHEEL_FRICTION`)
/// - Визуальные колёса: отдельные top-level entity (позу пишет `sync_wheel_visuals`)
///
/// Mass properties выставляет `initialize_vehicles` при активации.
pub fn spawn_vehicle(
    commands: &mut Commands,
    config: &VehicleConfig,
    transform: Transform,
    displays: VehicleDisplays,
) -> Entity {
    let half_extents = config.half_extents();

    let chassis = commands
        .spawn((
            transform,
            VehicleBody {
                mass: config.mass,
                half_extents,
                center_of_mass: config.center_of_mass(),
            },
            RigidBody::Dynamic,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Velocity::default(),
            ExternalForce::default(),
            Sleeping::disabled(),
            SceneMember,
            NeedsVisual,
        ))
        .id();

    let mut axles = Vec::with_capacity(config.axles.len());

    for axle in &config.axles {
        let mut side = |x: f32| {
            let anchor = Vec3::new(x, axle.y, axle.z);
            let wheel = WheelCollider::at(anchor, config.wheel.radius, config.wheel.lateral_grip);

            let wheel_entity = commands
                .spawn((
                    ChildOf(chassis),
                    Transform::from_translation(anchor),
                    wheel,
                    Collider::ball(config.wheel.radius),
                    ColliderMassProperties::Density(0.0),
                    WHEEL_FRICTION,
                ))
                .id();

            let (position, rotation) = wheel.world_pose(&transform);
            let visual_entity = commands
                .spawn((
                    Transform::from_translation(position).with_rotation(rotation),
                    WheelVisual {
                        radius: config.wheel.radius,
                    },
                    SceneMember,
                ))
                .id();

            (wheel_entity, visual_entity)
        };

        let (left_wheel, left_visual) = side(-axle.half_track);
        let (right_wheel, right_visual) = side(axle.half_track);

        axles.push(Axle {
            left_wheel,
            right_wheel,
            left_visual: Some(left_visual),
            right_visual: Some(right_visual),
            steering: axle.steering,
            motorized: axle.motorized,
        });
    }

    commands.entity(chassis).insert(Vehicle {
        axles,
        max_motor_torque: config.max_motor_torque,
        max_steering_angle: config.max_steering_angle,
        camera_offset: config.camera_offset(),
        time_display: displays.time,
        speed_display: displays.speed,
    });

    chassis
}
