//! Named scenes + reset (reload)
//!
//! Сцена = builder-система, зарегистрированная под именем.
//! `ReloadScene` удаляет все `SceneMember` entity и заново запускает builder.
//! Resources (включая physics clock) reload не трогает.

use std::collections::HashMap;

use bevy::ecs::system::SystemId;
use bevy::prelude::*;

use crate::logger::{log_error, log_info};

/// Имя главной сцены (её перезапускает кнопка Reset)
pub const MAIN_SCENE: &str = "Main";

/// Marker: entity принадлежит текущей сцене и удаляется при reload
///
/// Ставится только на top-level entity: children удаляются вместе с родителем.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SceneMember;

/// Запрос на (пере)загрузку сцены по имени
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ReloadScene {
    pub name: String,
}

impl ReloadScene {
    pub fn main() -> Self {
        Self {
            name: MAIN_SCENE.to_string(),
        }
    }
}

/// name → builder
#[derive(Resource, Debug, Default)]
pub struct SceneRegistry {
    scenes: HashMap<String, SystemId>,
}

impl SceneRegistry {
    pub fn get(&self, name: &str) -> Option<SystemId> {
        self.scenes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }
}

pub trait SceneAppExt {
    /// Регистрирует builder сцены. Повторная регистрация заменяет builder.
    fn register_scene<M>(
        &mut self,
        name: impl Into<String>,
        builder: impl IntoSystem<(), (), M> + 'static,
    ) -> &mut Self;
}

impl SceneAppExt for App {
    fn register_scene<M>(
        &mut self,
        name: impl Into<String>,
        builder: impl IntoSystem<(), (), M> + 'static,
    ) -> &mut Self {
        let id = self.world_mut().register_system(builder);
        self.world_mut()
            .get_resource_or_insert_with(SceneRegistry::default)
            .scenes
            .insert(name.into(), id);
        self
    }
}

/// Reset callback: всегда просит перезагрузить "Main"
pub fn request_main_reload(writer: &mut EventWriter<ReloadScene>) {
    writer.write(ReloadScene::main());
}

pub fn reload_scenes(
    mut commands: Commands,
    mut requests: EventReader<ReloadScene>,
    registry: Res<SceneRegistry>,
    members: Query<Entity, With<SceneMember>>,
) {
    // Несколько запросов за кадр → одна перезагрузка (последний выигрывает)
    let Some(request) = requests.read().last().cloned() else {
        return;
    };

    let Some(builder) = registry.get(&request.name) else {
        log_error(&format!("ReloadScene: scene '{}' is not registered", request.name));
        return;
    };

    let count = members.iter().count();
    for entity in members.iter() {
        commands.entity(entity).despawn();
    }
    commands.run_system(builder);

    log_info(&format!("Scene '{}' reloaded ({} entities dropped)", request.name, count));
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ReloadScene>()
            .init_resource::<SceneRegistry>()
            .add_systems(Update, reload_scenes);
    }
}
