//! Keyboard polling into the player's input sample.

use bevy::prelude::*;
use gameplay::{GameplaySet, Player, PlayerInput};

pub(crate) struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sample_keyboard.in_set(GameplaySet::Input));
    }
}

/// Reads arrows/WASD and Space into [`PlayerInput`].
fn sample_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut players: Query<&mut PlayerInput, With<Player>>,
) {
    let mut axis = 0.0;

    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }

    let grab_held = keyboard.pressed(KeyCode::Space);
    let jump_pressed =
        keyboard.just_pressed(KeyCode::ArrowUp) || keyboard.just_pressed(KeyCode::KeyW);

    for mut input in &mut players {
        *input = PlayerInput {
            axis,
            grab_held,
            jump_pressed,
        };
    }
}
