use bevy::prelude::*;
use axledrive_simulation::{Readout, SceneMember, VehicleDisplays};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (sync_readouts, highlight_reset_button));
    }
}

/// Marker: кнопка Reset (обрабатывается в controls.rs)
#[derive(Component)]
pub struct ResetButton;

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.15);
const BUTTON_HOVERED: Color = Color::srgb(0.25, 0.25, 0.25);
const BUTTON_PRESSED: Color = Color::srgb(0.35, 0.55, 0.35);

/// Spawn HUD: time/speed labels (top-left) + Reset button (top-right)
pub fn spawn_hud(commands: &mut Commands) -> VehicleDisplays {
    let label = |text: &str| {
        (
            Text::new(text),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Readout(text.to_string()),
        )
    };

    let time = commands.spawn(label("00.00.00")).id();
    let speed = commands.spawn(label("0.00 km/h")).id();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            SceneMember,
        ))
        .add_children(&[time, speed]);

    commands
        .spawn((
            Button,
            ResetButton,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            SceneMember,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Reset"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });

    VehicleDisplays {
        time: Some(time),
        speed: Some(speed),
    }
}

/// Readout (simulation) → Text (UI)
fn sync_readouts(mut query: Query<(&Readout, &mut Text), Changed<Readout>>) {
    for (readout, mut text) in query.iter_mut() {
        text.0.clone_from(&readout.0);
    }
}

fn highlight_reset_button(
    mut query: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ResetButton>)>,
) {
    for (interaction, mut color) in query.iter_mut() {
        *color = match interaction {
            Interaction::Pressed => BUTTON_PRESSED.into(),
            Interaction::Hovered => BUTTON_HOVERED.into(),
            Interaction::None => BUTTON_IDLE.into(),
        };
    }
}
