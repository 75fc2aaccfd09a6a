//! Demo level: a floor, the player and two crates.

use bevy::prelude::*;
use gameplay::{Collider, Crate, Floor, Player};
use tracing::info;

pub(crate) struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}

const FLOOR_SIZE: Vec2 = Vec2::new(1200.0, 40.0);
const FLOOR_Y: f32 = -200.0;
const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 60.0);
const CRATE_SIZE: Vec2 = Vec2::new(60.0, 60.0);

/// Y of a body of `height` standing on the floor.
fn standing_y(height: f32) -> f32 {
    FLOOR_Y + FLOOR_SIZE.y / 2.0 + height / 2.0
}

fn spawn_level(mut commands: Commands) {
    info!("Spawning level...");

    commands.spawn((Camera2d, Name::new("Camera")));

    commands.spawn((
        Floor,
        Collider::from_size(FLOOR_SIZE),
        Sprite::from_color(Color::srgb(0.35, 0.3, 0.25), FLOOR_SIZE),
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        Name::new("Floor"),
    ));

    commands.spawn((
        Player::default(),
        Collider::from_size(PLAYER_SIZE),
        Sprite::from_color(Color::srgb(0.2, 0.5, 0.9), PLAYER_SIZE),
        Transform::from_xyz(-200.0, standing_y(PLAYER_SIZE.y), 0.0),
        Name::new("Player"),
    ));

    for (index, x) in [0.0, 250.0].into_iter().enumerate() {
        commands.spawn((
            Crate::default(),
            Collider::from_size(CRATE_SIZE),
            Sprite::from_color(Color::srgb(0.7, 0.5, 0.2), CRATE_SIZE),
            Transform::from_xyz(x, standing_y(CRATE_SIZE.y), 0.0),
            Name::new(format!("Crate {index}")),
        ));
    }

    info!("Level spawned");
}
