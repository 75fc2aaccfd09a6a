//! Debug overlay showing the player's controller state.

use bevy::prelude::*;
use gameplay::{Player, overlay::overlay_lines};

pub(crate) struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay)
            .add_systems(PostUpdate, update_overlay);
    }
}

/// Overlay label showing one line of [`overlay_lines`], by index.
#[derive(Component)]
struct OverlayLabel(usize);

/// Distance of each label from the top of the window.
const LABEL_TOPS: [f32; 4] = [10.0, 30.0, 50.0, 80.0];

fn spawn_overlay(mut commands: Commands) {
    for (line, top) in LABEL_TOPS.into_iter().enumerate() {
        commands.spawn((
            Text::new(""),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(top),
                left: Val::Px(10.0),
                ..default()
            },
            OverlayLabel(line),
            Name::new(format!("Overlay Label {line}")),
        ));
    }
}

fn update_overlay(players: Query<&Player>, mut labels: Query<(&OverlayLabel, &mut Text)>) {
    let Some(player) = players.iter().next() else {
        return;
    };
    let lines = overlay_lines(player);
    for (label, mut text) in &mut labels {
        if let Some(line) = lines.get(label.0) {
            if text.0 != *line {
                text.0.clone_from(line);
            }
        }
    }
}
