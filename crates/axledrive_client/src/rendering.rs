use bevy::prelude::*;
use axledrive_simulation::{NeedsVisual, VehicleBody, WheelVisual};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_chassis_visuals, spawn_wheel_visuals));
    }
}

/// Mesh шасси прямо на entity rigid body (Transform пишет Rapier)
fn spawn_chassis_visuals(
    mut commands: Commands,
    query: Query<(Entity, &VehicleBody), With<NeedsVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, body) in query.iter() {
        let size = body.half_extents * 2.0;
        commands.entity(entity).remove::<NeedsVisual>().insert((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.2, 0.2),
                ..default()
            })),
            Visibility::default(),
        ));
    }
}

/// Mesh колеса — child с цилиндром, повёрнутым осью вдоль X
///
/// Transform самого WheelVisual перезаписывает sync_wheel_visuals.
fn spawn_wheel_visuals(
    mut commands: Commands,
    query: Query<(Entity, &WheelVisual), Added<WheelVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, wheel) in query.iter() {
        let tire = commands
            .spawn((
                Mesh3d(meshes.add(Cylinder::new(wheel.radius, wheel.radius * 0.6))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.1, 0.1, 0.1),
                    ..default()
                })),
                Transform::from_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
            ))
            .id();

        commands
            .entity(entity)
            .insert(Visibility::default())
            .add_child(tire);
    }
}
