//! Trailing camera component

use bevy::prelude::*;

/// Камера, которая едет за машиной
///
/// Позиция цели = `Vehicle::camera_offset` в локальных координатах машины.
/// Каждый physics step камера проходит `smoothing` долю пути к цели,
/// затем смотрит на origin машины.
#[derive(Component, Debug, Clone, Copy)]
pub struct FollowCamera {
    pub target: Entity,
    pub smoothing: f32,
}

impl FollowCamera {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            smoothing: 0.2,
        }
    }
}
