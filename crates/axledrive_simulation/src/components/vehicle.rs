//! Vehicle компоненты: шасси, оси, колёса

use bevy::prelude::*;

/// Пара колёс (левое/правое)
///
/// `left_wheel`/`right_wheel` — entity с `WheelCollider` (физика).
/// `left_visual`/`right_visual` — визуальные колёса, могут отсутствовать.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axle {
    pub left_wheel: Entity,
    pub right_wheel: Entity,
    pub left_visual: Option<Entity>,
    pub right_visual: Option<Entity>,
    /// Колёса этой оси поворачивают
    pub steering: bool,
    /// Колёса этой оси получают motor torque
    pub motorized: bool,
}

impl Axle {
    /// (wheel, visual) для обеих сторон
    pub fn sides(&self) -> [(Entity, Option<Entity>); 2] {
        [
            (self.left_wheel, self.left_visual),
            (self.right_wheel, self.right_visual),
        ]
    }
}

/// Контроллер машины (на entity шасси, рядом с rigid body)
#[derive(Component, Debug, Clone)]
pub struct Vehicle {
    pub axles: Vec<Axle>,
    /// N·m при vertical = 1
    pub max_motor_torque: f32,
    /// Градусы при horizontal = 1
    pub max_steering_angle: f32,
    /// Точка камеры в локальных координатах шасси
    pub camera_offset: Vec3,
    /// HUD: время с начала симуляции
    pub time_display: Option<Entity>,
    /// HUD: продольная скорость
    pub speed_display: Option<Entity>,
}

impl Vehicle {
    /// Torque для оси ввода `vertical` ∈ [−1, 1]
    pub fn motor_torque(&self, vertical: f32) -> f32 {
        self.max_motor_torque * vertical
    }

    /// Угол поворота (градусы) для оси ввода `horizontal` ∈ [−1, 1]
    pub fn steer_angle(&self, horizontal: f32) -> f32 {
        self.max_steering_angle * horizontal
    }
}

/// Масса и геометрия шасси (для mass properties rigid body)
#[derive(Component, Debug, Clone, Copy)]
pub struct VehicleBody {
    pub mass: f32,
    pub half_extents: Vec3,
    pub center_of_mass: Vec3,
}

impl Default for VehicleBody {
    fn default() -> Self {
        Self {
            mass: 1200.0,
            half_extents: Vec3::new(0.9, 0.35, 2.0),
            center_of_mass: Vec3::new(0.0, -0.5, 0.0),
        }
    }
}

impl VehicleBody {
    /// Главные моменты инерции сплошного бокса
    pub fn principal_inertia(&self) -> Vec3 {
        let size = self.half_extents * 2.0;
        let k = self.mass / 12.0;
        Vec3::new(
            k * (size.y * size.y + size.z * size.z),
            k * (size.x * size.x + size.z * size.z),
            k * (size.x * size.x + size.y * size.y),
        )
    }
}

/// Физическое колесо
///
/// Контроллер пишет `motor_torque` и `steer_angle`, wheel-система
/// (`vehicle::wheel`) превращает их в силы на шасси и обновляет
/// `rpm`/`spin`/`grounded`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct WheelCollider {
    pub radius: f32,
    /// Точка крепления в локальных координатах шасси
    pub anchor: Vec3,
    /// N на 1 m/s бокового скольжения
    pub lateral_grip: f32,
    /// N·m (положительный = вперёд)
    pub motor_torque: f32,
    /// Градусы (положительный = вправо)
    pub steer_angle: f32,
    /// Обороты в минуту (из скорости точки контакта)
    pub rpm: f32,
    /// Накопленный угол вращения (радианы) для визуала
    pub spin: f32,
    pub grounded: bool,
}

impl Default for WheelCollider {
    fn default() -> Self {
        Self {
            radius: 0.35,
            anchor: Vec3::ZERO,
            lateral_grip: 2500.0,
            motor_torque: 0.0,
            steer_angle: 0.0,
            rpm: 0.0,
            spin: 0.0,
            grounded: false,
        }
    }
}

impl WheelCollider {
    pub fn at(anchor: Vec3, radius: f32, lateral_grip: f32) -> Self {
        Self {
            radius,
            anchor,
            lateral_grip,
            ..default()
        }
    }

    /// Поворот колеса относительно шасси: steering (yaw) + вращение (roll)
    ///
    /// Forward в Bevy = −Z, поэтому положительный steer (вправо) —
    /// отрицательный поворот вокруг Y.
    pub fn local_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.steer_angle.to_radians()) * Quat::from_rotation_x(-self.spin)
    }

    /// Направление качения колеса в мировых координатах (без spin)
    pub fn world_forward(&self, chassis: &Transform) -> Vec3 {
        chassis.rotation * Quat::from_rotation_y(-self.steer_angle.to_radians()) * Vec3::NEG_Z
    }

    /// Мировая позиция и ориентация колеса
    pub fn world_pose(&self, chassis: &Transform) -> (Vec3, Quat) {
        (
            chassis.transform_point(self.anchor),
            chassis.rotation * self.local_rotation(),
        )
    }
}
