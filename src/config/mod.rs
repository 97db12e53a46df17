//! Configuration module for es-export
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "ES_EXPORT_SETTINGS_PATH";

/// Load settings from an explicit path, the environment, or the default locations.
///
/// An explicit path must exist. Without one, the first existing default
/// location wins and defaults are used when none exists. Environment
/// overrides are applied last.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => match find_settings_file() {
            Some(path) => {
                info!("Loading settings from: {}", path.display());
                Settings::from_file(&path)?
            }
            None => Settings::default(),
        },
    };

    settings.merge_env();
    Ok(settings)
}

/// First existing settings file among the default locations
fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![PathBuf::from("es-export.yml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("es-export/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
