//! Gameplay logic for Crate Pusher.
//!
//! This crate contains the player controller and the pushable crate, expressed
//! as Bevy systems over plain components. Contacts between colliders are
//! reported as messages, the systems react to them and to the per-frame
//! [`PlayerInput`] sample. Rendering and input polling live in the game binary.

use bevy::prelude::*;

pub mod components;
pub mod contacts;
pub mod error;
pub mod overlay;
pub mod physics;
pub mod player;
pub mod props;
pub mod settings;

pub use components::*;
pub use contacts::{
    ActiveContacts, Collider, Contact, ContactEnded, ContactKind, ContactStarted, Sensor,
};
pub use error::SettingsError;
pub use settings::{PlayerSettings, Settings, load_section, save_section};

/// Plugin bundle containing all gameplay systems.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use gameplay::GameplayPlugin;
///
/// App::new()
///     .add_plugins((MinimalPlugins, GameplayPlugin))
///     .run();
/// ```
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app
            // Keeps settings inserted by the binary
            .init_resource::<PlayerSettings>()
            .init_resource::<ActiveContacts>()
            .add_message::<ContactStarted>()
            .add_message::<ContactEnded>()
            .register_type::<Player>()
            .register_type::<Crate>()
            .register_type::<FixedJoint>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Detect,
                    GameplaySet::React,
                    GameplaySet::Control,
                    GameplaySet::Apply,
                )
                    .chain(),
            )
            .add_systems(Startup, player::warn_if_immobile)
            .add_systems(
                Update,
                contacts::detect_contacts.in_set(GameplaySet::Detect),
            )
            .add_systems(
                Update,
                (props::update_crate_grounding, player::sense_surroundings)
                    .in_set(GameplaySet::React),
            )
            .add_systems(
                Update,
                (
                    player::update_grab,
                    player::update_horizontal_velocity,
                    player::update_vertical_velocity,
                )
                    .chain()
                    .in_set(GameplaySet::Control),
            )
            .add_systems(
                Update,
                (physics::apply_velocity, physics::follow_joints)
                    .chain()
                    .in_set(GameplaySet::Apply),
            );
    }
}

/// System sets of the per-frame gameplay pipeline, run in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Sample devices into [`PlayerInput`].
    Input,
    /// Find colliders that started or stopped touching.
    Detect,
    /// Update grounding, blocking and adjacency from contacts.
    React,
    /// Grab, walk, jump and fall.
    Control,
    /// Move bodies and drag attached crates along.
    Apply,
}
