//! Vehicle configuration (`assets/vehicle.ron`)
//!
//! Всё, что в редакторе движка выставлялось бы через инспектор:
//! лимиты torque/steering, геометрия осей, offset камеры.
//! Векторы хранятся как `[f32; 3]` — bevy_math собран без `serialize`.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Путь по умолчанию (относительно рабочей директории)
pub const DEFAULT_CONFIG_PATH: &str = "assets/vehicle.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vehicle config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid vehicle config: {0}")]
    Invalid(String),
}

/// Одна ось: положение колёс относительно шасси + флаги
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxleConfig {
    /// Смещение оси вдоль продольной оси шасси (−Z = вперёд)
    pub z: f32,
    /// Высота крепления колёс относительно центра шасси
    pub y: f32,
    /// Половина колеи (расстояние от центра до колеса по X)
    pub half_track: f32,
    pub steering: bool,
    pub motorized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    pub radius: f32,
    /// Боковое сцепление (N на 1 m/s бокового скольжения)
    pub lateral_grip: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: 0.35,
            lateral_grip: 2500.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// N·m на колесо при полном газе
    pub max_motor_torque: f32,
    /// Градусы при полном повороте руля
    pub max_steering_angle: f32,
    pub mass: f32,
    pub half_extents: [f32; 3],
    /// Опущенный центр масс (устойчивость к опрокидыванию)
    pub center_of_mass: [f32; 3],
    /// Точка камеры в локальных координатах машины
    pub camera_offset: [f32; 3],
    /// Доля пути к цели за один physics step
    pub camera_smoothing: f32,
    /// Высота земли для проверки контакта колёс
    pub ground_level: f32,
    pub wheel: WheelConfig,
    pub axles: Vec<AxleConfig>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            max_motor_torque: 400.0,
            max_steering_angle: 30.0,
            mass: 1200.0,
            half_extents: [0.9, 0.35, 2.0],
            center_of_mass: [0.0, -0.5, 0.0],
            camera_offset: [0.0, 1.0, 3.5],
            camera_smoothing: 0.2,
            ground_level: 0.0,
            wheel: WheelConfig::default(),
            axles: vec![
                AxleConfig {
                    z: -1.3,
                    y: -0.3,
                    half_track: 0.85,
                    steering: true,
                    motorized: false,
                },
                AxleConfig {
                    z: 1.3,
                    y: -0.3,
                    half_track: 0.85,
                    steering: false,
                    motorized: true,
                },
            ],
        }
    }
}

impl VehicleConfig {
    pub fn center_of_mass(&self) -> Vec3 {
        Vec3::from_array(self.center_of_mass)
    }

    pub fn camera_offset(&self) -> Vec3 {
        Vec3::from_array(self.camera_offset)
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::from_array(self.half_extents)
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: VehicleConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Загружает конфиг, при отсутствии файла возвращает defaults.
    /// Ошибка парсинга/валидации не глотается.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axles.is_empty() {
            return Err(ConfigError::Invalid("at least one axle is required".into()));
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::Invalid(format!("mass must be positive, got {}", self.mass)));
        }
        if self.wheel.radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wheel radius must be positive, got {}",
                self.wheel.radius
            )));
        }
        if self.half_extents.iter().any(|extent| *extent <= 0.0) {
            return Err(ConfigError::Invalid("chassis half extents must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.camera_smoothing) {
            return Err(ConfigError::Invalid(format!(
                "camera smoothing must be in [0, 1], got {}",
                self.camera_smoothing
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VehicleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.center_of_mass(), Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(config.camera_smoothing, 0.2);
        assert_eq!(config.axles.len(), 2);
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let config = VehicleConfig::from_ron_str("(max_motor_torque: 250.0)").unwrap();
        assert_eq!(config.max_motor_torque, 250.0);
        assert_eq!(config.max_steering_angle, 30.0);
        assert_eq!(config.axles.len(), 2);
    }

    #[test]
    fn test_empty_axles_rejected() {
        let result = VehicleConfig::from_ron_str("(axles: [])");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_smoothing_rejected() {
        let config = VehicleConfig {
            camera_smoothing: 1.5,
            ..default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = VehicleConfig::from_ron_str("not ron at all {");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = VehicleConfig::from_ron_str(include_str!("../../../assets/vehicle.ron")).unwrap();
        assert_eq!(config, VehicleConfig::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = VehicleConfig::load_or_default("definitely/missing/vehicle.ron").unwrap();
        assert_eq!(config, VehicleConfig::default());
    }
}
