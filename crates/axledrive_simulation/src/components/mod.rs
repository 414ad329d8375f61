//! ECS компоненты
//!
//! Организация по доменам:
//! - vehicle: шасси, оси, wheel colliders (Vehicle, Axle, VehicleBody, WheelCollider)
//! - hud: string sinks для HUD (Readout)
//! - camera: камера, следующая за машиной (FollowCamera)

mod camera;
mod hud;
mod vehicle;

pub use camera::*;
pub use hud::*;
pub use vehicle::*;
