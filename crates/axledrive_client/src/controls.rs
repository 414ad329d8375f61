use bevy::prelude::*;
use axledrive_simulation::input::smooth_drive_axes;
use axledrive_simulation::{request_main_reload, DriveAxes, ReloadScene};

use crate::hud::ResetButton;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            poll_drive_axes
                .after(bevy::input::InputSystem)
                .before(smooth_drive_axes),
        )
        .add_systems(Update, (reset_on_button, reset_on_key));
    }
}

/// -1 / 0 / +1 по паре клавиш
fn key_axis(keys: &ButtonInput<KeyCode>, negative: &[KeyCode], positive: &[KeyCode]) -> f32 {
    let mut value = 0.0;
    if keys.any_pressed(negative.iter().copied()) {
        value -= 1.0;
    }
    if keys.any_pressed(positive.iter().copied()) {
        value += 1.0;
    }
    value
}

/// Keyboard (WASD / стрелки) + left stick первого геймпада → raw DriveAxes
///
/// Стик побеждает, если отклонён сильнее клавиатуры.
fn poll_drive_axes(
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut axes: ResMut<DriveAxes>,
) {
    let mut vertical = key_axis(&keys, &[KeyCode::KeyS, KeyCode::ArrowDown], &[KeyCode::KeyW, KeyCode::ArrowUp]);
    let mut horizontal = key_axis(&keys, &[KeyCode::KeyA, KeyCode::ArrowLeft], &[KeyCode::KeyD, KeyCode::ArrowRight]);

    if let Some(gamepad) = gamepads.iter().next() {
        let stick = gamepad.left_stick();
        if stick.y.abs() > vertical.abs() {
            vertical = stick.y;
        }
        if stick.x.abs() > horizontal.abs() {
            horizontal = stick.x;
        }
    }

    axes.set_raw(vertical, horizontal);
}

fn reset_on_button(
    query: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut writer: EventWriter<ReloadScene>,
) {
    for interaction in query.iter() {
        if *interaction == Interaction::Pressed {
            request_main_reload(&mut writer);
        }
    }
}

fn reset_on_key(keys: Res<ButtonInput<KeyCode>>, mut writer: EventWriter<ReloadScene>) {
    if keys.just_pressed(KeyCode::KeyR) {
        request_main_reload(&mut writer);
    }
}
