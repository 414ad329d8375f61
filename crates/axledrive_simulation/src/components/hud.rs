//! HUD string sinks

use bevy::prelude::*;

/// Текст, который симуляция хочет показать на экране.
///
/// Симуляция ничего не знает о UI: клиент копирует строку в `Text`
/// того же entity (см. `axledrive_client::hud`).
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct Readout(pub String);
