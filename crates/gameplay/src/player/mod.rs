//! Player controller: sensing, grabbing, walking and jumping.

pub mod grab;
pub mod jump;
pub mod movement;
pub mod sensing;

pub use grab::*;
pub use jump::*;
pub use movement::*;
pub use sensing::*;

use tracing::warn;

use bevy::prelude::*;

use crate::settings::PlayerSettings;

/// Startup check for an unusable walk speed.
pub fn warn_if_immobile(settings: Res<PlayerSettings>) {
    if settings.walk_speed == 0.0 {
        warn!("Player walk speed is 0, it will not move");
    }
}
