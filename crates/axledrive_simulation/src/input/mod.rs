//! Two-axis drive input (vertical = газ/тормоз, horizontal = руль)
//!
//! Клиент пишет raw значения (клавиатура/геймпад), headless — скрипт.
//! `smooth_drive_axes` раз в кадр сдвигает сглаженные значения к raw,
//! контроллер в FixedUpdate читает только сглаженные.

use bevy::prelude::*;

/// Параметры сглаживания одной оси
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSmoothing {
    /// Скорость роста к raw (единиц/сек)
    pub sensitivity: f32,
    /// Скорость возврата к нулю без ввода (единиц/сек)
    pub gravity: f32,
    /// При смене знака raw сразу сбрасывать в 0
    pub snap: bool,
}

impl Default for AxisSmoothing {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
        }
    }
}

impl AxisSmoothing {
    /// Без сглаживания: значение сразу равно raw
    pub const INSTANT: Self = Self {
        sensitivity: f32::INFINITY,
        gravity: f32::INFINITY,
        snap: true,
    };

    /// Один шаг сглаживания. Результат всегда в [−1, 1].
    pub fn step(&self, current: f32, raw: f32, delta: f32) -> f32 {
        let raw = raw.clamp(-1.0, 1.0);
        let mut current = current.clamp(-1.0, 1.0);

        if self.snap && raw != 0.0 && current != 0.0 && raw.signum() != current.signum() {
            current = 0.0;
        }

        let rate = if raw == 0.0 { self.gravity } else { self.sensitivity };
        if rate.is_infinite() {
            return raw;
        }
        let max_step = rate * delta;
        let diff = raw - current;

        if diff.abs() <= max_step {
            raw
        } else {
            current + diff.signum() * max_step
        }
    }
}

/// Polled two-axis input provider
#[derive(Resource, Debug, Clone, Default)]
pub struct DriveAxes {
    pub raw_vertical: f32,
    pub raw_horizontal: f32,
    pub vertical: f32,
    pub horizontal: f32,
    pub smoothing: AxisSmoothing,
}

impl DriveAxes {
    /// Сразу выставить значения (тесты, скрипты)
    pub fn set(&mut self, vertical: f32, horizontal: f32) {
        self.raw_vertical = vertical.clamp(-1.0, 1.0);
        self.raw_horizontal = horizontal.clamp(-1.0, 1.0);
        self.vertical = self.raw_vertical;
        self.horizontal = self.raw_horizontal;
    }

    pub fn set_raw(&mut self, vertical: f32, horizontal: f32) {
        self.raw_vertical = vertical;
        self.raw_horizontal = horizontal;
    }

    pub fn advance(&mut self, delta: f32) {
        self.vertical = self.smoothing.step(self.vertical, self.raw_vertical, delta);
        self.horizontal = self.smoothing.step(self.horizontal, self.raw_horizontal, delta);
    }
}

pub fn smooth_drive_axes(mut axes: ResMut<DriveAxes>, time: Res<Time>) {
    axes.advance(time.delta_secs());
}

pub struct DriveInputPlugin;

impl Plugin for DriveInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DriveAxes>()
            .add_systems(PreUpdate, smooth_drive_axes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rises_at_sensitivity() {
        let smoothing = AxisSmoothing::default();

        let value = smoothing.step(0.0, 1.0, 0.1);

        assert!((value - 0.3).abs() < 1e-6, "value = {value}");
    }

    #[test]
    fn test_reaches_target_without_overshoot() {
        let smoothing = AxisSmoothing::default();

        let value = smoothing.step(0.9, 1.0, 0.1);

        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_returns_to_zero_with_gravity() {
        let smoothing = AxisSmoothing::default();

        let value = smoothing.step(0.5, 0.0, 0.1);

        assert!((value - 0.2).abs() < 1e-6, "value = {value}");
    }

    #[test]
    fn test_snap_on_reverse() {
        let smoothing = AxisSmoothing::default();

        // Было +1, нажали назад: сначала 0, потом −0.3
        let value = smoothing.step(1.0, -1.0, 0.1);

        assert!((value + 0.3).abs() < 1e-6, "value = {value}");
    }

    #[test]
    fn test_instant_follows_raw() {
        let value = AxisSmoothing::INSTANT.step(0.0, -0.75, 0.0);
        assert_eq!(value, -0.75);
    }

    #[test]
    fn test_raw_is_clamped() {
        let mut axes = DriveAxes::default();
        axes.set(5.0, -3.0);

        assert_eq!(axes.vertical, 1.0);
        assert_eq!(axes.horizontal, -1.0);
    }
}
