//! Pushable crates.

use bevy::prelude::*;
use tracing::debug;

use crate::components::{Crate, Floor};
use crate::contacts::{ContactEnded, ContactKind, ContactStarted};

/// System that tracks whether each crate rests on a floor.
///
/// Only solid collisions count; a player's trigger volume touching the crate
/// does not change its grounding.
pub fn update_crate_grounding(
    mut started: MessageReader<ContactStarted>,
    mut ended: MessageReader<ContactEnded>,
    mut crates: Query<&mut Crate>,
    floors: Query<(), With<Floor>>,
) {
    let changes = started
        .read()
        .map(|ContactStarted(contact)| (contact, true))
        .chain(ended.read().map(|ContactEnded(contact)| (contact, false)));

    for (contact, grounded) in changes {
        if contact.kind != ContactKind::Collision {
            continue;
        }
        for (me, other) in contact.sides() {
            if !floors.contains(other) {
                continue;
            }
            if let Ok(mut body) = crates.get_mut(me) {
                body.grounded = grounded;
                debug!("Crate {me} grounded: {grounded}");
            }
        }
    }
}
