//! RON-backed settings sections.
//!
//! The settings file is a map from section name to section struct:
//!
//! ```ron
//! {
//!     "player": (walk_speed: 300.0, gravity: 1800.0, jump_height: 700.0),
//! }
//! ```
//!
//! A missing file or section yields the section's defaults, missing fields
//! inside a section fall back to their default individually.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use bevy::prelude::*;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::error::SettingsError;

type SectionMap = BTreeMap<String, ron::Value>;

/// A named section of the settings file.
pub trait Settings: Serialize + DeserializeOwned + Default {
    const SECTION: &'static str;
}

/// Tuning of the player controller.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Horizontal speed in world units per second. Halved while grabbing.
    pub walk_speed: f32,
    /// Vertical speed lost per second while airborne.
    pub gravity: f32,
    /// Vertical speed set when a jump starts.
    ///
    /// The world is y-up, so a positive value launches the player upward and
    /// gravity then counts it down.
    pub jump_height: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            walk_speed: 300.0,
            gravity: 1800.0,
            jump_height: 700.0,
        }
    }
}

impl Settings for PlayerSettings {
    const SECTION: &'static str = "player";
}

fn read_sections(path: &Path) -> Result<Option<SectionMap>, SettingsError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(ron::from_str(&content)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Loads section `T` from the settings file at `path`.
pub fn load_section<T: Settings>(path: &Path) -> Result<T, SettingsError> {
    let Some(mut sections) = read_sections(path)? else {
        info!(
            "No settings file at {}, using defaults for `{}`",
            path.display(),
            T::SECTION
        );
        return Ok(T::default());
    };

    match sections.remove(T::SECTION) {
        Some(value) => value
            .into_rust::<T>()
            .map_err(|source| SettingsError::InvalidSection {
                section: T::SECTION,
                source,
            }),
        None => {
            debug!("Section `{}` not present, using defaults", T::SECTION);
            Ok(T::default())
        }
    }
}

/// Writes section `T` into the settings file at `path`, keeping other sections.
pub fn save_section<T: Settings>(path: &Path, value: &T) -> Result<(), SettingsError> {
    let mut sections = read_sections(path)?.unwrap_or_default();

    let encoded = ron::to_string(value)?;
    let section: ron::Value = ron::from_str(&encoded)?;
    sections.insert(T::SECTION.to_owned(), section);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = ron::ser::to_string_pretty(&sections, PrettyConfig::default())?;
    fs::write(path, content)?;

    info!("Saved settings section `{}` to {}", T::SECTION, path.display());
    Ok(())
}
