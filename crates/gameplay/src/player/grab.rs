//! Grabbing crates.
//!
//! While the grab key is held next to a crate, the player is snapped flush to
//! the crate and a [`FixedJoint`] ties the crate to the player. Releasing the
//! key removes the joint again.

use bevy::prelude::*;
use tracing::{debug, info};

use crate::components::{BlockDir, Crate, FixedJoint, Player, PlayerInput};
use crate::contacts::Collider;

/// Player x position flush against the crate's edge.
///
/// With the crate on the left the player ends up right of it, otherwise left
/// of it. The gap is the sum of both half widths, so the boxes touch without
/// overlapping.
pub fn flush_position_x(
    crate_x: f32,
    crate_half_width: f32,
    player_half_width: f32,
    blocked: BlockDir,
) -> f32 {
    let amount = crate_half_width + player_half_width;
    let direction = if blocked == BlockDir::Left { 1.0 } else { -1.0 };
    crate_x + amount * direction
}

/// System running the grab state machine of every player.
pub fn update_grab(
    mut commands: Commands,
    mut players: Query<(Entity, &mut Player, &PlayerInput, &mut Transform, &Collider)>,
    crates: Query<(&Transform, &Collider, Has<FixedJoint>), (With<Crate>, Without<Player>)>,
) {
    for (entity, mut player, input, mut transform, collider) in &mut players {
        if let Some(sticked) = player.sticked.filter(|&sticked| !crates.contains(sticked)) {
            debug!("Sticked crate {sticked} of player {entity} is gone");
            player.sticked = None;
            player.grabbing = false;
            player.blocked = BlockDir::None;
        }

        if input.grab_held {
            let Some(sticked) = player.sticked else {
                continue;
            };
            if player.grabbing {
                continue;
            }
            let Ok((crate_transform, crate_collider, has_joint)) = crates.get(sticked) else {
                continue;
            };

            player.grabbing = true;

            transform.translation = Vec3::new(
                flush_position_x(
                    crate_transform.translation.x,
                    crate_collider.half_width(),
                    collider.half_width(),
                    player.blocked,
                ),
                transform.translation.y,
                0.0,
            );

            if !has_joint {
                commands.entity(sticked).insert(FixedJoint {
                    connected: entity,
                    offset: crate_transform.translation - transform.translation,
                });
            }
            info!("Player {entity} grabbed crate {sticked}");
        } else if player.grabbing {
            player.grabbing = false;
            let Some(sticked) = player.sticked else {
                continue;
            };
            if let Ok((_, _, true)) = crates.get(sticked) {
                commands.entity(sticked).remove::<FixedJoint>();
            }
            info!("Player {entity} released crate {sticked}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_on_the_left_puts_player_right_of_it() {
        assert_eq!(flush_position_x(0.0, 1.0, 0.5, BlockDir::Left), 1.5);
    }

    #[test]
    fn crate_on_the_right_puts_player_left_of_it() {
        assert_eq!(flush_position_x(4.0, 1.0, 0.5, BlockDir::Right), 2.5);
        assert_eq!(flush_position_x(4.0, 1.0, 0.5, BlockDir::None), 2.5);
    }
}
