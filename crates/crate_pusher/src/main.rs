mod hud;
mod input;
mod level;

use anyhow::anyhow;
use app::{AppBuilder, Application};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use gameplay::{GameplayPlugin, PlayerSettings, load_section};
use tracing::warn;

struct CratePusher;

impl Application for CratePusher {
    const APP_ID: &'static str = "crate_pusher";
}

fn main() -> anyhow::Result<()> {
    let mut game = AppBuilder::<CratePusher>::new(env!("CARGO_PKG_VERSION"))
        .map_err(|err| anyhow!(err))?
        .build_with_bevy(|mut app, ctx| {
            let settings = match load_section::<PlayerSettings>(&ctx.settings_file()) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("Invalid settings file, using defaults: {err}");
                    PlayerSettings::default()
                }
            };

            app.add_plugins(
                DefaultPlugins
                    .set(WindowPlugin {
                        primary_window: Some(Window {
                            title: "Crate Pusher".into(),
                            ..default()
                        }),
                        ..default()
                    })
                    // Logging is already set up by AppBuilder
                    .disable::<LogPlugin>(),
            )
            .insert_resource(settings)
            .add_plugins((
                GameplayPlugin,
                input::KeyboardInputPlugin,
                hud::DebugOverlayPlugin,
                level::LevelPlugin,
            ));
            app
        });

    game.run();
    Ok(())
}
