//! Startup diagnostics, checked against the captured log output.

use std::io;
use std::sync::{Arc, Mutex};

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use gameplay::{GameplayPlugin, PlayerSettings, player};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs the startup check once with `walk_speed` and returns what it logged.
fn startup_log(walk_speed: f32) -> String {
    let mut app = App::new();
    app.insert_resource(PlayerSettings {
        walk_speed,
        ..default()
    })
    .add_plugins((MinimalPlugins, GameplayPlugin));

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    // Runs on this thread, so the scoped subscriber sees the event.
    tracing::subscriber::with_default(subscriber, || {
        app.world_mut()
            .run_system_once(player::warn_if_immobile)
            .unwrap();
    });

    logs.contents()
}

#[test]
fn zero_walk_speed_warns() {
    let output = startup_log(0.0);
    assert!(output.contains("WARN"));
    assert!(output.contains("walk speed is 0"));
}

#[test]
fn usable_walk_speed_stays_quiet() {
    assert!(startup_log(10.0).is_empty());
}
