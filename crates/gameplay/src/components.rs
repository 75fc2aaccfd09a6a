//! Gameplay components shared by the crate and player systems.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::contacts::{Collider, Sensor};

/// Marker for the floor surface.
///
/// Players become grounded through trigger contacts with it, crates through
/// collision contacts.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Collider)]
pub struct Floor;

/// A pushable crate.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[require(Collider)]
pub struct Crate {
    /// True while the crate rests on a [`Floor`].
    pub grounded: bool,
}

/// Side on which a crate obstructs the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum BlockDir {
    #[default]
    None,
    Left,
    Right,
}

impl BlockDir {
    /// Block side for an obstacle at `other_x` seen from a player at `player_x`.
    pub fn from_positions(other_x: f32, player_x: f32) -> Self {
        if other_x < player_x {
            BlockDir::Left
        } else {
            BlockDir::Right
        }
    }
}

impl fmt::Display for BlockDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockDir::None => "NONE",
            BlockDir::Left => "LEFT",
            BlockDir::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// Player controller state.
///
/// The player is a trigger volume: its contacts with floors and crates are
/// reported as [`ContactKind::Trigger`](crate::contacts::ContactKind::Trigger).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Velocity, PlayerInput, Collider, Sensor)]
pub struct Player {
    /// Side on which an adjacent crate blocks movement.
    pub blocked: BlockDir,
    /// The adjacent crate, candidate for grabbing. Not owned.
    pub sticked: Option<Entity>,
    /// Whether the sticked crate is attached to the player.
    pub grabbing: bool,
    pub grounded: bool,
    pub jumping: bool,
}

/// Movement velocity.
///
/// `x` holds the horizontal displacement of the current frame (already scaled
/// by the frame time), `y` the vertical speed integrated under gravity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
pub struct Velocity {
    pub linear: Vec3,
}

/// Input sample for one frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Horizontal axis in `[-1, 1]`.
    pub axis: f32,
    /// Grab key is held down.
    pub grab_held: bool,
    /// Jump key went down this frame.
    pub jump_pressed: bool,
}

/// Rigid attachment of an entity to another body.
///
/// Inserted on a crate while the player grabs it. The crate keeps `offset`
/// relative to `connected` on the XY plane.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FixedJoint {
    pub connected: Entity,
    pub offset: Vec3,
}
