//! Horizontal player movement.

use bevy::prelude::*;

use crate::components::{BlockDir, Player, PlayerInput, Velocity};
use crate::settings::PlayerSettings;

/// Whether the player may move in the direction of `axis`.
///
/// A blocked side stays open while grabbing so the crate can be pushed.
pub fn can_move(axis: f32, blocked: BlockDir, grabbing: bool) -> bool {
    (axis < 0.0 && (blocked != BlockDir::Left || grabbing))
        || (axis > 0.0 && (blocked != BlockDir::Right || grabbing))
}

/// Walk speed, halved while pushing or pulling a crate.
pub fn effective_speed(walk_speed: f32, grabbing: bool) -> f32 {
    if grabbing { walk_speed / 2.0 } else { walk_speed }
}

/// Horizontal displacement for one frame.
pub fn horizontal_velocity(
    axis: f32,
    blocked: BlockDir,
    grabbing: bool,
    walk_speed: f32,
    dt: f32,
) -> f32 {
    if can_move(axis, blocked, grabbing) {
        axis * dt * effective_speed(walk_speed, grabbing)
    } else {
        0.0
    }
}

/// System that turns the horizontal axis into the player's horizontal velocity.
pub fn update_horizontal_velocity(
    mut players: Query<(&Player, &PlayerInput, &mut Velocity)>,
    settings: Res<PlayerSettings>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (player, input, mut velocity) in &mut players {
        velocity.linear.x = horizontal_velocity(
            input.axis,
            player.blocked,
            player.grabbing,
            settings.walk_speed,
            dt,
        );
    }
}
