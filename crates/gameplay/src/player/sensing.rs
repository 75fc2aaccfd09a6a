//! Reactions of the player's trigger volume to floors and crates.

use bevy::prelude::*;
use tracing::debug;

use crate::components::{BlockDir, Crate, Floor, Player};
use crate::contacts::{ContactEnded, ContactKind, ContactStarted};

/// System that updates grounding, block direction and the sticked crate from
/// trigger contacts.
pub fn sense_surroundings(
    mut started: MessageReader<ContactStarted>,
    mut ended: MessageReader<ContactEnded>,
    mut players: Query<(&mut Player, &Transform)>,
    floors: Query<(), With<Floor>>,
    crates: Query<&Transform, (With<Crate>, Without<Player>)>,
) {
    for ContactStarted(contact) in started.read() {
        if contact.kind != ContactKind::Trigger {
            continue;
        }
        for (me, other) in contact.sides() {
            let Ok((mut player, transform)) = players.get_mut(me) else {
                continue;
            };

            if floors.contains(other) {
                player.grounded = true;
                player.jumping = false;
                debug!("Player {me} landed on floor {other}");
            } else if let Ok(crate_transform) = crates.get(other) {
                player.blocked = BlockDir::from_positions(
                    crate_transform.translation.x,
                    transform.translation.x,
                );
                if player.sticked.is_none() {
                    player.sticked = Some(other);
                }
                debug!("Player {me} blocked {} by crate {other}", player.blocked);
            }
        }
    }

    for ContactEnded(contact) in ended.read() {
        if contact.kind != ContactKind::Trigger {
            continue;
        }
        for (me, other) in contact.sides() {
            let Ok((mut player, _)) = players.get_mut(me) else {
                continue;
            };

            if floors.contains(other) {
                player.grounded = false;
                debug!("Player {me} left floor {other}");
            } else if player.sticked == Some(other) || crates.contains(other) {
                // The crate may already be despawned, so compare against the
                // recorded reference as well.
                player.blocked = BlockDir::None;
                if !player.grabbing {
                    player.sticked = None;
                }
                debug!("Player {me} no longer next to crate {other}");
            }
        }
    }
}
